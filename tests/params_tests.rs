// Host-side tests for shading parameters and the control table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod params {
    include!("../src/core/params.rs");
}

use glam::Vec3;
use params::*;
use std::collections::HashSet;

#[test]
fn default_lighting_matches_startup_values() {
    let p = ShadingParams::default();
    assert_eq!(p.light_position, Vec3::new(0.5, 0.5, 1.0));
    assert_eq!(p.light_color, Vec3::ONE);
    assert_eq!(p.ambient_color, Vec3::splat(0.2));
}

#[test]
fn every_slider_reads_back_what_it_writes() {
    let mut p = ShadingParams::default();
    for (i, spec) in PARAM_SPECS.iter().enumerate() {
        let v = 0.5 + i as f32;
        p.set(spec.key, v);
        assert_eq!(p.get(spec.key), v, "{}", spec.id);
    }
    // Setting each key touched a distinct field
    for (i, spec) in PARAM_SPECS.iter().enumerate() {
        assert_eq!(p.get(spec.key), 0.5 + i as f32, "{} was overwritten", spec.id);
    }
}

#[test]
fn light_position_is_edited_per_axis() {
    let mut p = ShadingParams::default();
    p.set(ParamKey::LightPositionX, -1.0);
    p.set(ParamKey::LightPositionZ, 3.0);
    assert_eq!(p.light_position, Vec3::new(-1.0, 0.5, 3.0));
}

#[test]
fn out_of_range_values_are_passed_through() {
    let mut p = ShadingParams::default();
    p.set(ParamKey::Frequency, 10_000.0);
    p.set(ParamKey::Decay, -3.0);
    assert_eq!(p.frequency, 10_000.0);
    assert_eq!(p.decay, -3.0);
}

#[test]
fn control_table_is_well_formed() {
    let mut ids = HashSet::new();
    let defaults = ShadingParams::default();
    for spec in PARAM_SPECS {
        assert!(ids.insert(spec.id), "duplicate id {}", spec.id);
        assert!(spec.min < spec.max, "{}", spec.id);
        assert!(spec.step > 0.0, "{}", spec.id);
        let v = defaults.get(spec.key);
        assert!(
            (spec.min..=spec.max).contains(&v),
            "default {} for {} outside [{}, {}]",
            v,
            spec.id,
            spec.min,
            spec.max
        );
    }
    for spec in COLOR_SPECS {
        assert!(ids.insert(spec.id), "duplicate id {}", spec.id);
    }
    // 10 scalars, 3 light axes, 2 colors
    assert_eq!(ids.len(), 15);
}

#[test]
fn colors_are_settable_by_key() {
    let mut p = ShadingParams::default();
    p.set_color(ColorKey::AmbientColor, Vec3::new(0.0, 0.5, 1.0));
    assert_eq!(p.color(ColorKey::AmbientColor), Vec3::new(0.0, 0.5, 1.0));
    assert_eq!(p.color(ColorKey::LightColor), Vec3::ONE);
}

#[test]
fn hex_color_parse() {
    assert_eq!(parse_hex_color("#ffffff"), Some(Vec3::ONE));
    assert_eq!(parse_hex_color("#000000"), Some(Vec3::ZERO));
    let c = parse_hex_color("#ff8000").unwrap();
    assert!((c.x - 1.0).abs() < 1e-6);
    assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(c.z, 0.0);
}

#[test]
fn hex_color_parse_rejects_malformed_input() {
    assert_eq!(parse_hex_color("ffffff"), None);
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("#gggggg"), None);
    assert_eq!(parse_hex_color("#ff00ff00"), None);
    assert_eq!(parse_hex_color(""), None);
}

#[test]
fn hex_color_format() {
    assert_eq!(format_hex_color(Vec3::new(0.2, 0.2, 0.2)), "#333333");
    assert_eq!(format_hex_color(Vec3::ONE), "#ffffff");
    // Out-of-gamut values are clamped for display
    assert_eq!(format_hex_color(Vec3::new(2.0, -1.0, 0.0)), "#ff0000");
    let back = parse_hex_color(&format_hex_color(Vec3::new(0.2, 0.4, 0.6))).unwrap();
    assert!((back - Vec3::new(0.2, 0.4, 0.6)).abs().max_element() < 1.0 / 255.0);
}
