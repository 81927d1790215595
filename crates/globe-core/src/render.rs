//! Per-frame compositor.
//!
//! Draw order: water, land, origin, destination, dashed route arc,
//! destination marker, ripples, hover highlight.

use crate::config::{GlobeConfig, Rgb};
use crate::geo::Polygon;
use crate::path::GeoPath;
use crate::projection::Projection;
use crate::ripple::RippleEngine;
use crate::selection::Selection;
use crate::surface::Surface;
use crate::topo::World;
use std::f64::consts::TAU;

/// Read-only state a frame is drawn from.
pub struct Scene<'a> {
    pub config: &'a GlobeConfig,
    pub projection: &'a Projection,
    pub world: &'a World,
    pub selection: &'a Selection,
    pub hover: Option<usize>,
    pub dash_offset: f64,
    pub view_size: (f64, f64),
}

/// Side effects of a frame the page chrome has to mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// A country other than origin/destination is highlighted; the hover
    /// label should use its highlight color.
    pub hover_highlighted: bool,
}

pub fn render_frame(
    surface: &mut impl Surface,
    scene: &Scene<'_>,
    ripples: &mut RippleEngine,
    now_ms: f64,
) -> FrameReport {
    let colors = &scene.config.colors;
    let path = GeoPath::new(scene.projection);
    let countries = &scene.world.countries;

    surface.clear_rect(0.0, 0.0, scene.view_size.0, scene.view_size.1);

    surface.begin_path();
    path.sphere(surface);
    surface.set_fill_style(&colors.water.to_string());
    surface.fill();

    fill(surface, &path, &scene.world.land, colors.land);

    if let Some(c) = scene.selection.origin.and_then(|i| countries.get(i)) {
        fill(surface, &path, &c.polygons, colors.origin);
    }
    if let Some(c) = scene.selection.destination.and_then(|i| countries.get(i)) {
        fill(surface, &path, &c.polygons, colors.destination);
    }

    if let Some(arc) = scene.selection.arc {
        surface.begin_path();
        path.line(surface, &[arc.from, arc.to]);
        surface.set_line_width(scene.config.arc_line_width);
        surface.set_stroke_style(&colors.arc.to_string());
        surface.set_line_dash(&scene.config.arc_dash);
        surface.set_line_dash_offset(-scene.dash_offset);
        surface.stroke();
        surface.set_line_dash(&[]);

        if let Some(at) = scene.projection.project(arc.to) {
            surface.begin_path();
            surface.arc(at.x, at.y, scene.config.marker_radius, 0.0, TAU, false);
            surface.set_fill_style(&colors.destination_point.to_string());
            surface.fill();
        }
    }

    ripples.tick(now_ms, scene.projection, colors, surface);

    let mut report = FrameReport::default();
    if let Some(i) = scene.hover.filter(|&i| !scene.selection.is_highlighted(i)) {
        if let Some(c) = countries.get(i) {
            report.hover_highlighted = true;
            fill(surface, &path, &c.polygons, colors.hover);
        }
    }
    report
}

fn fill(surface: &mut impl Surface, path: &GeoPath<'_>, polygons: &[Polygon], color: Rgb) {
    surface.begin_path();
    path.polygons(surface, polygons);
    surface.set_fill_style(&color.to_string());
    surface.fill();
}
