// Host-side tests for the ripple store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod core {
    pub mod ripples {
        include!("../src/core/ripples.rs");
    }
}

use crate::core::ripples::*;
use constants::{DEFAULT_RIPPLE_DURATION_SEC, MAX_RIPPLES};
use error::RippleError;

fn filled(n: usize) -> RippleStore {
    let mut store = RippleStore::new();
    for i in 0..n {
        assert!(store.add(0.5, 0.5, i as f32 * 0.01));
    }
    store
}

#[test]
fn add_grows_store_until_capacity() {
    let mut store = RippleStore::new();
    assert!(store.is_empty());
    for n in 1..=MAX_RIPPLES {
        assert!(store.add(0.1, 0.2, 0.0));
        assert_eq!(store.len(), n);
    }
    assert!(store.is_full());
    assert_eq!(store.capacity(), 50);
}

#[test]
fn add_at_capacity_is_dropped() {
    let mut store = filled(MAX_RIPPLES);
    // 51st click: not inserted, nothing evicted
    assert!(!store.add(0.9, 0.9, 1.0));
    assert_eq!(store.len(), MAX_RIPPLES);
    assert_eq!(store.peek_front().map(|r| r.start_time()), Some(0.0));
    assert!(store.iter().all(|r| r.origin().x == 0.5));
}

#[test]
fn push_back_on_full_store_reports_capacity() {
    let mut store = filled(MAX_RIPPLES);
    let extra = Ripple::new(glam::Vec2::new(0.1, 0.1), 2.0, 1.0).unwrap();
    let err = store.push_back(extra).unwrap_err();
    assert_eq!(err, RippleError::CapacityExceeded { capacity: 50 });
    assert!(!err.is_fatal());
}

#[test]
fn insertion_order_is_preserved_across_expiry() {
    let mut store = RippleStore::new();
    store.add(0.1, 0.0, 0.0);
    store.add(0.2, 0.0, 1.0);
    store.add(0.3, 0.0, 2.0);

    // First ripple expires at t > 6.0
    assert_eq!(store.tick(6.5).count, 2);
    assert_eq!(store.get(0).map(|r| r.origin().x), Some(0.2));
    assert_eq!(store.get(1).map(|r| r.origin().x), Some(0.3));

    store.add(0.4, 0.0, 6.6);
    let xs: Vec<f32> = store.iter().map(|r| r.origin().x).collect();
    assert_eq!(xs, vec![0.2, 0.3, 0.4]);
}

#[test]
fn tick_before_any_expiry_removes_nothing() {
    let mut store = RippleStore::new();
    store.add(0.1, 0.1, 0.0);
    store.add(0.2, 0.2, 0.5);
    for t in [0.0, 1.0, 3.0, 5.99] {
        assert_eq!(store.tick(t).count, 2, "removed something at t={t}");
    }
}

#[test]
fn ripple_is_alive_exactly_at_its_duration() {
    let mut store = RippleStore::new();
    store.add(0.5, 0.5, 1.0);
    assert_eq!(store.tick(1.0 + DEFAULT_RIPPLE_DURATION_SEC).count, 1);
    assert_eq!(store.tick(1.0 + DEFAULT_RIPPLE_DURATION_SEC + 0.01).count, 0);
}

#[test]
fn tick_removes_only_the_oldest_even_when_several_are_expired() {
    let mut store = RippleStore::new();
    store.add(0.1, 0.1, 0.0);
    store.add(0.2, 0.2, 0.1);
    store.add(0.3, 0.3, 0.2);

    // All three are long expired (e.g. after a backgrounded tab)
    assert_eq!(store.tick(100.0).count, 2);
    assert_eq!(store.peek_front().map(|r| r.start_time()), Some(0.1));
    assert_eq!(store.tick(100.0).count, 1);
    assert_eq!(store.tick(100.0).count, 0);
}

#[test]
fn drain_policy_removes_every_expired_ripple_in_one_tick() {
    let mut store = RippleStore::with_policy(ExpiryPolicy::DrainExpired);
    assert_eq!(store.policy(), ExpiryPolicy::DrainExpired);
    store.add(0.1, 0.1, 0.0);
    store.add(0.2, 0.2, 0.1);
    store.add(0.3, 0.3, 5.0);
    assert_eq!(store.tick(7.0).count, 1);
    assert_eq!(store.peek_front().map(|r| r.start_time()), Some(5.0));
}

#[test]
fn second_tick_at_same_time_is_a_no_op() {
    let mut store = RippleStore::new();
    store.add(0.1, 0.1, 0.0);
    store.add(0.2, 0.2, 3.0);
    assert_eq!(store.tick(6.5).count, 1);
    assert_eq!(store.tick(6.5).count, 1);
    assert_eq!(store.peek_front().map(|r| r.start_time()), Some(3.0));
}

#[test]
fn empty_store_ticks_to_zero() {
    let mut store = RippleStore::new();
    let frame = store.tick(42.0);
    assert_eq!(frame.count, 0);
    assert!(frame.slots.iter().all(|s| *s == [0.0; 4]));
}

#[test]
fn single_ripple_lifecycle() {
    let mut store = RippleStore::new();
    assert!(store.add(0.5, 0.5, 0.0));

    let frame = store.tick(5.9);
    assert_eq!(frame.count, 1);
    assert_eq!(frame.slots[0], [0.5, 0.5, 0.0, 6.0]);
    assert_eq!(&frame.flat()[0..4], &[0.5, 0.5, 0.0, 6.0]);

    let frame = store.tick(6.1);
    assert_eq!(frame.count, 0);
    assert!(store.is_empty());
}

#[test]
fn trailing_slots_keep_stale_values() {
    let mut store = RippleStore::new();
    store.add(0.25, 0.75, 0.0);
    store.add(0.5, 0.5, 1.0);

    // Writes both slots, then expires the first ripple
    assert_eq!(store.tick(6.5).count, 1);
    // Writes slot 0 only, then expires the second ripple
    let frame = store.tick(7.5);
    assert_eq!(frame.count, 0);
    assert_eq!(frame.slots[0], [0.5, 0.5, 1.0, 6.0]);
    assert_eq!(frame.slots[1], [0.5, 0.5, 1.0, 6.0]);
}

#[test]
fn flat_buffer_is_slot_major() {
    let mut store = RippleStore::new();
    store.add(0.1, 0.2, 0.0);
    store.add(0.3, 0.4, 1.5);
    let frame = store.tick(2.0);
    let flat = frame.flat();
    assert_eq!(flat.len(), MAX_RIPPLES * 4);
    assert_eq!(&flat[4..8], &[0.3, 0.4, 1.5, 6.0]);
}

#[test]
fn ripple_rejects_non_positive_duration() {
    let origin = glam::Vec2::new(0.5, 0.5);
    assert_eq!(
        Ripple::new(origin, 0.0, 0.0),
        Err(RippleError::InvalidDuration(0.0))
    );
    assert!(Ripple::new(origin, 0.0, -1.0).is_err());
    assert!(Ripple::new(origin, 0.0, f32::NAN).is_err());
    assert!(Ripple::new(origin, 0.0, 0.01).is_ok());
}

#[test]
fn ripple_origin_is_clamped_to_unit_square() {
    let r = Ripple::new(glam::Vec2::new(-0.5, 1.5), 0.0, 1.0).unwrap();
    assert_eq!(r.origin(), glam::Vec2::new(0.0, 1.0));
    assert_eq!(r.packed(), [0.0, 1.0, 0.0, 1.0]);
}

#[test]
fn ripple_age_and_expiry() {
    let r = Ripple::new(glam::Vec2::splat(0.5), 2.0, 6.0).unwrap();
    assert!((r.age(5.0) - 3.0).abs() < 1e-6);
    assert!(!r.is_expired(8.0));
    assert!(r.is_expired(8.001));
}
