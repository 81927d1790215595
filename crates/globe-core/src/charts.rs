//! Donut and progress-bar panels drawn onto a [`Surface`].

use crate::config::Rgb;
use crate::surface::Surface;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const DONUT_MAX_SIZE: f64 = 150.0;
pub const DONUT_MARGIN: f64 = 10.0;
pub const DONUT_HOLE_RATIO: f64 = 0.7;
pub const DONUT_FALLBACK_SIZE: f64 = 100.0;
const DONUT_TRACK: &str = "rgba(255, 255, 255, 0.2)";

pub const BAR_HEIGHT: f64 = 20.0;
pub const BAR_PADDING: f64 = 5.0;
pub const BAR_RADIUS: f64 = 10.0;
pub const BAR_FALLBACK_WIDTH: f64 = 400.0;
const BAR_TRACK: &str = "rgba(255, 255, 255, 0.1)";

/// One spreadsheet-fed donut panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPanel {
    pub container_id: &'static str,
    pub sheet: &'static str,
    pub color: Rgb,
}

pub const PANELS: [ChartPanel; 4] = [
    ChartPanel {
        container_id: "chart-cuba",
        sheet: "CUBA",
        color: Rgb::new(0x4b, 0x8c, 0xf2),
    },
    ChartPanel {
        container_id: "chart-interiores",
        sheet: "INTERIORES",
        color: Rgb::new(0x00, 0xcc, 0x99),
    },
    ChartPanel {
        container_id: "chart-testes",
        sheet: "TESTES",
        color: Rgb::new(0xff, 0xcc, 0x00),
    },
    ChartPanel {
        container_id: "chart-exteriores",
        sheet: "EXTERIORES",
        color: Rgb::new(0xff, 0x66, 0x66),
    },
];

/// Sheet holding the overall progress shown in the bar.
pub const PROGRESS_SHEET: &str = "EVO";

/// Square donut geometry for a container of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutLayout {
    pub size: f64,
    pub outer: f64,
    pub inner: f64,
}

impl DonutLayout {
    /// `None` when the container is too small to draw into; the caller should
    /// then reserve [`DONUT_FALLBACK_SIZE`] for it.
    pub fn fit(width: f64, height: f64) -> Option<Self> {
        let size = width.min(height).min(DONUT_MAX_SIZE) - DONUT_MARGIN;
        if size <= 0.0 || !size.is_finite() {
            return None;
        }
        let outer = size / 2.0;
        Some(Self {
            size,
            outer,
            inner: outer * DONUT_HOLE_RATIO,
        })
    }
}

/// Filled share starts at 9 o'clock and runs clockwise; the rest of the ring
/// is a faint track. The rounded percentage sits in the middle.
pub fn draw_donut(surface: &mut impl Surface, layout: &DonutLayout, percentage: f64, color: Rgb) {
    let pct = percentage.clamp(0.0, 100.0);
    let c = layout.size / 2.0;
    let start = -PI;
    let split = start + TAU * pct / 100.0;

    surface.clear_rect(0.0, 0.0, layout.size, layout.size);
    if split > start {
        annular_sector(surface, c, layout, start, split);
        surface.set_fill_style(&color.to_string());
        surface.fill();
    }
    if split < start + TAU {
        annular_sector(surface, c, layout, split, start + TAU);
        surface.set_fill_style(DONUT_TRACK);
        surface.fill();
    }

    surface.set_font("bold 1.5rem sans-serif");
    surface.set_text_align("center");
    surface.set_text_baseline("middle");
    surface.set_fill_style("white");
    surface.fill_text(&format!("{:.0}%", pct), c, c);
}

fn annular_sector(surface: &mut impl Surface, c: f64, layout: &DonutLayout, from: f64, to: f64) {
    surface.begin_path();
    surface.arc(c, c, layout.outer, from, to, false);
    surface.arc(c, c, layout.inner, to, from, true);
    surface.close_path();
}

/// Bar geometry for a container `width` px wide (0 means unknown).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub width: f64,
    pub height: f64,
}

impl BarLayout {
    pub fn fit(width: f64) -> Self {
        let width = if width > 0.0 { width } else { BAR_FALLBACK_WIDTH };
        Self {
            width,
            height: BAR_HEIGHT + BAR_PADDING * 2.0,
        }
    }

    pub fn track_width(&self) -> f64 {
        (self.width - BAR_PADDING * 2.0).max(0.0)
    }

    pub fn fill_width(&self, percentage: f64) -> f64 {
        self.track_width() * percentage.clamp(0.0, 100.0) / 100.0
    }
}

pub fn draw_progress_bar(surface: &mut impl Surface, layout: &BarLayout, percentage: f64, color: Rgb) {
    surface.clear_rect(0.0, 0.0, layout.width, layout.height);

    rounded_rect(surface, BAR_PADDING, BAR_PADDING, layout.track_width(), BAR_HEIGHT, BAR_RADIUS);
    surface.set_fill_style(BAR_TRACK);
    surface.fill();

    let filled = layout.fill_width(percentage);
    if filled > 0.0 {
        rounded_rect(surface, BAR_PADDING, BAR_PADDING, filled, BAR_HEIGHT, BAR_RADIUS);
        surface.set_fill_style(&color.to_string());
        surface.fill();
    }
}

/// Rectangle with corner radius clamped to fit, like SVG `rx`/`ry`.
fn rounded_rect(surface: &mut impl Surface, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    surface.begin_path();
    surface.move_to(x + r, y);
    surface.line_to(x + w - r, y);
    surface.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0, false);
    surface.line_to(x + w, y + h - r);
    surface.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2, false);
    surface.line_to(x + r, y + h);
    surface.arc(x + r, y + h - r, r, FRAC_PI_2, PI, false);
    surface.line_to(x, y + r);
    surface.arc(x + r, y + r, r, PI, PI + FRAC_PI_2, false);
    surface.close_path();
}
