// Frame composition checked against a recorded draw list.

mod common;

use common::{assert_close, globe};
use globe_core::surface::{DrawOp, Recording};
use globe_core::LonLat;

#[test]
fn nothing_is_drawn_before_start() {
    let mut g = globe("JAPAN");
    let mut rec = Recording::new();
    assert!(g.frame(16.0, &mut rec).is_none());
    assert!(rec.ops.is_empty());
}

#[test]
fn layers_are_painted_in_order() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    let mut rec = Recording::new();
    let report = g.frame(16.0, &mut rec).unwrap();

    assert!(!report.hover_highlighted);
    assert!(matches!(
        rec.ops.first(),
        Some(DrawOp::ClearRect { width, height, .. }) if *width == 800.0 && *height == 800.0
    ));
    assert_eq!(
        rec.filled_styles(),
        vec!["#111111", "#424447", "#4b8cf2", "#ffffff", "#00ffff"]
    );
    assert_eq!(rec.stroked_styles(), vec!["#00ffff"]);
    assert!(rec.ops.contains(&DrawOp::LineDash(vec![4.0, 6.0])));
    // dash is reset after the arc
    let last_dash = rec.ops.iter().rev().find_map(|op| match op {
        DrawOp::LineDash(d) => Some(d.as_slice()),
        _ => None,
    });
    assert_eq!(last_dash, Some(&[][..]));
}

#[test]
fn dash_offset_marches_and_wraps() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    let mut rec = Recording::new();
    g.frame(16.0, &mut rec);
    assert_close(g.dash_offset(), 0.32, 1e-12);
    assert!(rec.ops.contains(&DrawOp::LineDashOffset(-g.dash_offset())));

    // 1000 ms adds 20 px, two whole dash periods
    g.frame(1016.0, &mut rec);
    assert_close(g.dash_offset(), 0.32, 1e-9);
    assert!(g.dash_offset() < 10.0);
}

#[test]
fn ripples_are_stroked_after_the_arc() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    let mut rec = Recording::new();
    g.frame(800.0, &mut rec);
    rec.clear();
    g.frame(1800.0, &mut rec);

    let strokes = rec.stroked_styles();
    assert_eq!(strokes[0], "#00ffff");
    // two from t=800, two emitted this frame
    assert_eq!(strokes.len(), 5);
    assert!(strokes[1..].iter().all(|s| s.starts_with("rgba(")));
}

#[test]
fn hovering_other_country_adds_highlight_last() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    let at = g.projection().project(LonLat::new(0.0, 45.0)).unwrap();
    g.hover_at(at).unwrap();

    let mut rec = Recording::new();
    let report = g.frame(16.0, &mut rec).unwrap();
    assert!(report.hover_highlighted);
    assert_eq!(rec.filled_styles().last(), Some(&"#eeeeee"));
}

#[test]
fn hovering_origin_keeps_its_color() {
    let mut g = globe("JAPAN");
    g.start(0.0);
    let at = g.projection().project(LonLat::new(-8.0, 39.5)).unwrap();
    g.hover_at(at).unwrap();

    let mut rec = Recording::new();
    let report = g.frame(16.0, &mut rec).unwrap();
    assert!(!report.hover_highlighted);
    assert!(!rec.filled_styles().contains(&"#eeeeee"));
}

#[test]
fn hidden_destination_has_no_marker() {
    let mut g = globe("JAPAN");
    g.projection_mut().set_rotation(100.0, 30.0, 0.0);
    let mut rec = Recording::new();
    g.render(0.0, &mut rec);
    assert!(!rec.filled_styles().contains(&"#00ffff"));
}

#[test]
fn zero_sized_viewport_falls_back() {
    let mut g = globe("JAPAN");
    assert_eq!(g.resize(0.0, 0.0), (480.0, 480.0));
    assert_eq!(g.projection().scale(), 240.0);
    assert_eq!(g.projection().translate().x, 240.0);

    g.start(0.0);
    let mut rec = Recording::new();
    g.frame(16.0, &mut rec).unwrap();
    assert!(rec.ops.iter().all(|op| match op {
        DrawOp::MoveTo { x, y } | DrawOp::LineTo { x, y } => x.is_finite() && y.is_finite(),
        _ => true,
    }));
}
