// Donut and progress bar drawing.

mod common;

use common::assert_close;
use globe_core::charts::{
    draw_donut, draw_progress_bar, BarLayout, DonutLayout, BAR_FALLBACK_WIDTH, PANELS,
};
use globe_core::surface::{DrawOp, Recording};
use std::f64::consts::PI;

#[test]
fn donut_fits_smaller_side_and_caps_size() {
    let l = DonutLayout::fit(300.0, 120.0).unwrap();
    assert_eq!(l.size, 110.0);
    assert_eq!(l.outer, 55.0);
    assert_close(l.inner, 38.5, 1e-12);

    assert_eq!(DonutLayout::fit(1000.0, 1000.0).unwrap().size, 140.0);
    assert!(DonutLayout::fit(0.0, 200.0).is_none());
    assert!(DonutLayout::fit(8.0, 8.0).is_none());
}

#[test]
fn donut_quarter_starts_at_nine_o_clock() {
    let l = DonutLayout::fit(100.0, 100.0).unwrap();
    let mut rec = Recording::new();
    draw_donut(&mut rec, &l, 25.0, PANELS[0].color);

    assert_eq!(
        rec.filled_styles(),
        vec!["#4b8cf2", "rgba(255, 255, 255, 0.2)"]
    );
    let first_arc = rec.ops.iter().find_map(|op| match op {
        DrawOp::Arc { start, end, .. } => Some((*start, *end)),
        _ => None,
    });
    let (start, end) = first_arc.unwrap();
    assert_close(start, -PI, 1e-12);
    assert_close(end, -PI / 2.0, 1e-12);
    assert!(rec.ops.contains(&DrawOp::FillText {
        text: "25%".into(),
        x: 45.0,
        y: 45.0,
    }));
}

#[test]
fn donut_extremes_draw_single_sector() {
    let l = DonutLayout::fit(100.0, 100.0).unwrap();
    let mut rec = Recording::new();
    draw_donut(&mut rec, &l, 0.0, PANELS[1].color);
    assert_eq!(rec.filled_styles(), vec!["rgba(255, 255, 255, 0.2)"]);

    rec.clear();
    draw_donut(&mut rec, &l, 140.0, PANELS[1].color);
    assert_eq!(rec.filled_styles(), vec!["#00cc99"]);
    assert!(rec.ops.iter().any(|op| matches!(op, DrawOp::FillText { text, .. } if text == "100%")));
}

#[test]
fn progress_bar_widths() {
    let bar = BarLayout::fit(210.0);
    assert_eq!(bar.track_width(), 200.0);
    assert_eq!(bar.fill_width(30.0), 60.0);
    assert_eq!(bar.fill_width(250.0), 200.0);
    assert_eq!(BarLayout::fit(0.0).width, BAR_FALLBACK_WIDTH);

    let mut rec = Recording::new();
    draw_progress_bar(&mut rec, &bar, 0.0, PANELS[2].color);
    assert_eq!(rec.filled_styles(), vec!["rgba(255, 255, 255, 0.1)"]);

    rec.clear();
    draw_progress_bar(&mut rec, &bar, 50.0, PANELS[2].color);
    assert_eq!(rec.filled_styles(), vec!["rgba(255, 255, 255, 0.1)", "#ffcc00"]);
}
