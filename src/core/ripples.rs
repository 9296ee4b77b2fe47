use crate::constants::{DEFAULT_RIPPLE_DURATION_SEC, MAX_RIPPLES, RIPPLE_STRIDE};
use crate::error::RippleError;
use glam::Vec2;
use std::collections::VecDeque;

/// One expanding disturbance. Immutable once created; everything the shader
/// animates is derived from `now - start_time`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    origin: Vec2,
    start_time: f32,
    duration: f32,
}

impl Ripple {
    /// Origin components are clamped into the unit square.
    pub fn new(origin: Vec2, start_time: f32, duration: f32) -> Result<Self, RippleError> {
        if !(duration > 0.0) {
            return Err(RippleError::InvalidDuration(duration));
        }
        Ok(Self {
            origin: origin.clamp(Vec2::ZERO, Vec2::ONE),
            start_time,
            duration,
        })
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn age(&self, now_sec: f32) -> f32 {
        now_sec - self.start_time
    }

    /// Strictly past its duration; a ripple exactly at `duration` is still alive.
    #[inline]
    pub fn is_expired(&self, now_sec: f32) -> bool {
        self.age(now_sec) > self.duration
    }

    #[inline]
    pub fn packed(&self) -> [f32; RIPPLE_STRIDE] {
        [self.origin.x, self.origin.y, self.start_time, self.duration]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Check only the oldest ripple and remove at most one per tick. A burst
    /// of expired ripples (e.g. after the tab was backgrounded) drains one
    /// frame at a time.
    #[default]
    OnePerFrame,
    /// Pop from the front until the oldest ripple is alive.
    DrainExpired,
}

/// Result of a store tick: the flat slot buffer and how many leading slots
/// are live. Slots at or beyond `count` hold stale data from earlier frames.
#[derive(Clone, Copy, Debug)]
pub struct RippleFrame<'a> {
    pub slots: &'a [[f32; RIPPLE_STRIDE]; MAX_RIPPLES],
    pub count: usize,
}

impl<'a> RippleFrame<'a> {
    pub fn flat(&self) -> &'a [f32] {
        let slots: &'a [[f32; RIPPLE_STRIDE]; MAX_RIPPLES] = self.slots;
        bytemuck::cast_slice(&slots[..])
    }
}

/// Bounded, oldest-first collection of active ripples.
pub struct RippleStore {
    ripples: VecDeque<Ripple>,
    slots: [[f32; RIPPLE_STRIDE]; MAX_RIPPLES],
    default_duration: f32,
    policy: ExpiryPolicy,
}

impl Default for RippleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleStore {
    pub fn new() -> Self {
        Self {
            ripples: VecDeque::with_capacity(MAX_RIPPLES),
            slots: [[0.0; RIPPLE_STRIDE]; MAX_RIPPLES],
            default_duration: DEFAULT_RIPPLE_DURATION_SEC,
            policy: ExpiryPolicy::default(),
        }
    }

    pub fn with_policy(policy: ExpiryPolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    pub const fn capacity(&self) -> usize {
        MAX_RIPPLES
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ripples.len() >= MAX_RIPPLES
    }

    pub fn get(&self, index: usize) -> Option<&Ripple> {
        self.ripples.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn peek_front(&self) -> Option<&Ripple> {
        self.ripples.front()
    }

    /// Append a ripple unless the store is full. Full stores never evict.
    pub fn push_back(&mut self, ripple: Ripple) -> Result<(), RippleError> {
        if self.is_full() {
            return Err(RippleError::CapacityExceeded {
                capacity: MAX_RIPPLES,
            });
        }
        self.ripples.push_back(ripple);
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<Ripple> {
        self.ripples.pop_front()
    }

    /// Spawn a ripple at a normalized surface position with the default
    /// duration. Returns whether it was inserted; clicks on a full store are
    /// dropped without error.
    pub fn add(&mut self, origin_x: f32, origin_y: f32, now_sec: f32) -> bool {
        let origin = Vec2::new(origin_x, origin_y);
        let ripple = match Ripple::new(origin, now_sec, self.default_duration) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("[ripples] rejected: {}", e);
                return false;
            }
        };
        match self.push_back(ripple) {
            Ok(()) => {
                log::debug!(
                    "[ripples] add ({:.3},{:.3}) t={:.3} active={}",
                    origin_x,
                    origin_y,
                    now_sec,
                    self.len()
                );
                true
            }
            Err(_) => false,
        }
    }

    /// Serialize active ripples into the slot buffer, then run the expiry
    /// check against the front of the queue. The returned count reflects the
    /// store after expiry.
    pub fn tick(&mut self, now_sec: f32) -> RippleFrame<'_> {
        for (slot, ripple) in self.slots.iter_mut().zip(self.ripples.iter()) {
            *slot = ripple.packed();
        }
        match self.policy {
            ExpiryPolicy::OnePerFrame => {
                self.expire_front(now_sec);
            }
            ExpiryPolicy::DrainExpired => while self.expire_front(now_sec) {},
        }
        RippleFrame {
            slots: &self.slots,
            count: self.ripples.len(),
        }
    }

    fn expire_front(&mut self, now_sec: f32) -> bool {
        match self.ripples.front() {
            Some(oldest) if oldest.is_expired(now_sec) => {
                self.ripples.pop_front();
                true
            }
            _ => false,
        }
    }
}
