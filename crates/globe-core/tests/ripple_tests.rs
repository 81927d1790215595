// Ripple lifecycle and emission gating.

mod common;

use common::{assert_close, globe};
use globe_core::ripple::{RippleColor, RippleEngine};
use globe_core::surface::{DrawOp, Recording};
use globe_core::{LonLat, Palette, Projection, RippleConfig};

fn engine() -> RippleEngine {
    RippleEngine::new(&RippleConfig::default())
}

#[test]
fn ripple_lives_for_exactly_its_duration() {
    let mut e = engine();
    e.emit(LonLat::new(0.0, 0.0), RippleColor::Origin, 1000.0);

    assert_eq!(e.active(999.0).count(), 0);
    assert_eq!(e.active(1000.0).count(), 1);
    assert_eq!(e.active(2999.9).count(), 1);
    assert_eq!(e.active(3000.0).count(), 0);
}

#[test]
fn radius_grows_and_opacity_fades_linearly() {
    let mut e = engine();
    e.emit(LonLat::new(0.0, 0.0), RippleColor::Destination, 0.0);
    let r = e.active(0.0).next().cloned().unwrap();

    let start = e.shape(&r, 0.0).unwrap();
    assert_eq!(start.radius, 0.0);
    assert_eq!(start.opacity, 1.0);

    let half = e.shape(&r, 1000.0).unwrap();
    assert_close(half.radius, 10.0, 1e-12);
    assert_close(half.opacity, 0.5, 1e-12);

    let mut last = start;
    for t in (100..2000).step_by(100) {
        let s = e.shape(&r, t as f64).unwrap();
        assert!(s.radius > last.radius);
        assert!(s.opacity < last.opacity);
        assert_close(s.radius, 20.0 * t as f64 / 2000.0, 1e-9);
        last = s;
    }
}

#[test]
fn tick_drops_expired_and_skips_hidden_anchors() {
    let mut e = engine();
    let mut projection = Projection::new();
    projection.set_rotation(0.0, 0.0, 0.0);
    let palette = Palette::default();

    e.emit(LonLat::new(0.0, 0.0), RippleColor::Origin, 0.0);
    e.emit(LonLat::new(180.0, 0.0), RippleColor::Destination, 0.0);
    e.emit(LonLat::new(10.0, 10.0), RippleColor::Destination, 500.0);

    let mut rec = Recording::new();
    e.tick(1000.0, &projection, &palette, &mut rec);
    assert_eq!(e.len(), 3);
    // the antipodal one is kept but not drawn
    assert_eq!(rec.count(|op| matches!(op, DrawOp::Stroke)), 2);
    assert_eq!(
        rec.stroked_styles(),
        vec!["rgba(75,140,242,0.5)", "rgba(0,255,255,0.75)"]
    );

    rec.clear();
    e.tick(2000.0, &projection, &palette, &mut rec);
    assert_eq!(e.len(), 1);
    assert_eq!(rec.count(|op| matches!(op, DrawOp::Stroke)), 1);

    e.tick(2500.0, &projection, &palette, &mut rec);
    assert!(e.is_empty());
}

#[test]
fn emitters_fire_on_interval_for_visible_endpoints() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    g.advance(799.0);
    assert!(g.ripples().is_empty());
    g.advance(800.0);
    assert_eq!(g.ripples().len(), 2);
    g.advance(1600.0);
    assert_eq!(g.ripples().len(), 4);
}

#[test]
fn emitters_skip_endpoints_on_far_side() {
    let mut g = globe("JAPAN");
    // both Portugal and Japan end up behind the globe
    g.projection_mut().set_rotation(100.0, 30.0, 0.0);
    g.start(0.0);
    g.advance(800.0);
    g.advance(1600.0);
    assert!(g.ripples().is_empty());
}

#[test]
fn stopped_globe_emits_nothing() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    g.stop();
    g.advance(800.0);
    assert!(g.ripples().is_empty());
}
