// Host-side tests for constants and their agreement with the WGSL sources.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

static FRAGMENT_WGSL: &str = include_str!("../www/shaders/ripple.frag.wgsl");
static VERTEX_WGSL: &str = include_str!("../www/shaders/ripple.vert.wgsl");

#[test]
fn ripple_capacity_and_lifetime() {
    assert_eq!(MAX_RIPPLES, 50);
    assert_eq!(RIPPLE_STRIDE, 4);
    assert_eq!(DEFAULT_RIPPLE_DURATION_SEC, 6.0);
}

#[test]
fn fragment_shader_array_matches_capacity() {
    let decl = format!("array<vec4<f32>, {}>", MAX_RIPPLES);
    assert!(FRAGMENT_WGSL.contains(&decl), "missing `{}`", decl);
    assert!(FRAGMENT_WGSL.contains(&format!("const MAX_RIPPLES: u32 = {}u;", MAX_RIPPLES)));
}

#[test]
fn shader_bindings_match_slots() {
    for (binding, name) in [
        (UNIFORM_BINDING, "var<uniform> u"),
        (TEXTURE_BINDING, "var surface_tex"),
        (SAMPLER_BINDING, "var surface_sampler"),
    ] {
        let decl = format!("@group(0) @binding({}) {}", binding, name);
        assert!(FRAGMENT_WGSL.contains(&decl), "missing `{}`", decl);
    }
    assert!(VERTEX_WGSL.contains("fn vs_main"));
    assert!(FRAGMENT_WGSL.contains("fn fs_main"));
}

#[test]
fn quad_is_two_triangles_covering_ndc() {
    assert_eq!(QUAD_VERTICES.len(), 6);
    for v in QUAD_VERTICES {
        assert!(v[0].abs() == 1.0 && v[1].abs() == 1.0);
    }
    // Both triangles wind the same way and together cover area 4
    let area = |a: [f32; 2], b: [f32; 2], c: [f32; 2]| {
        0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]))
    };
    let t0 = area(QUAD_VERTICES[0], QUAD_VERTICES[1], QUAD_VERTICES[2]);
    let t1 = area(QUAD_VERTICES[3], QUAD_VERTICES[4], QUAD_VERTICES[5]);
    assert_eq!(t0.signum(), t1.signum());
    assert_eq!(t0.abs() + t1.abs(), 4.0);
}

#[test]
fn asset_urls_are_relative() {
    for url in [VERTEX_SHADER_URL, FRAGMENT_SHADER_URL, SURFACE_TEXTURE_URL] {
        assert!(!url.starts_with('/'), "{}", url);
    }
}
