// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn client_point_maps_into_backing_pixels() {
    // 400x300 CSS box at (10, 20) backed by an 800x600 canvas
    let p = client_to_canvas(
        DVec2::new(210.0, 170.0),
        DVec2::new(10.0, 20.0),
        DVec2::new(400.0, 300.0),
        DVec2::new(800.0, 600.0),
    );
    assert_eq!(p, DVec2::new(400.0, 300.0));
}

#[test]
fn client_point_identity_when_sizes_match() {
    let p = client_to_canvas(
        DVec2::new(15.0, 25.0),
        DVec2::ZERO,
        DVec2::new(500.0, 500.0),
        DVec2::new(500.0, 500.0),
    );
    assert_eq!(p, DVec2::new(15.0, 25.0));
}

#[test]
fn degenerate_rect_falls_back_to_css_offset() {
    let p = client_to_canvas(
        DVec2::new(50.0, 60.0),
        DVec2::new(10.0, 10.0),
        DVec2::ZERO,
        DVec2::new(800.0, 600.0),
    );
    assert_eq!(p, DVec2::new(40.0, 50.0));
    assert!(p.is_finite());
}

#[test]
fn canvas_extent_prefers_css_size() {
    assert_eq!(canvas_extent(640.0, 1000.0, 0.6), 640.0);
    assert_eq!(canvas_extent(0.0, 1000.0, 0.6), 600.0);
    assert_eq!(canvas_extent(-3.0, 500.0, 0.6), 300.0);
}
