//! Expanding, fading rings anchored to geographic points.

use crate::config::{Palette, RippleConfig};
use crate::geo::LonLat;
use crate::projection::Projection;
use crate::surface::Surface;
use std::f64::consts::TAU;

/// Which palette entry a ripple is stroked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleColor {
    Origin,
    Destination,
}

impl RippleColor {
    pub fn css(self, palette: &Palette, opacity: f64) -> String {
        match self {
            Self::Origin => palette.origin_ripple.with_alpha(opacity),
            Self::Destination => palette.destination_ripple.with_alpha(opacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub started_ms: f64,
    pub center: LonLat,
    pub color: RippleColor,
}

/// Size and alpha of a ripple at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleShape {
    pub radius: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct RippleEngine {
    ripples: Vec<Ripple>,
    duration_ms: f64,
    max_radius: f64,
    line_width: f64,
}

impl RippleEngine {
    pub fn new(config: &RippleConfig) -> Self {
        Self {
            ripples: Vec::new(),
            duration_ms: config.duration_ms,
            max_radius: config.max_radius,
            line_width: config.line_width,
        }
    }

    pub fn emit(&mut self, center: LonLat, color: RippleColor, now_ms: f64) {
        self.ripples.push(Ripple {
            started_ms: now_ms,
            center,
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    /// Ripples alive at `now_ms`: started at or before it and younger than the
    /// configured duration.
    pub fn active(&self, now_ms: f64) -> impl Iterator<Item = &Ripple> {
        self.ripples
            .iter()
            .filter(move |r| self.shape(r, now_ms).is_some())
    }

    /// Linear in age: radius grows from 0 to the max, opacity falls from 1.
    pub fn shape(&self, ripple: &Ripple, now_ms: f64) -> Option<RippleShape> {
        let age = now_ms - ripple.started_ms;
        if age < 0.0 || age >= self.duration_ms {
            return None;
        }
        let progress = age / self.duration_ms;
        Some(RippleShape {
            radius: self.max_radius * progress,
            opacity: 1.0 - progress,
        })
    }

    /// Drop expired ripples and stroke the survivors whose anchor is on the
    /// visible hemisphere.
    pub fn tick(
        &mut self,
        now_ms: f64,
        projection: &Projection,
        palette: &Palette,
        surface: &mut impl Surface,
    ) {
        let duration = self.duration_ms;
        self.ripples.retain(|r| now_ms - r.started_ms < duration);
        for ripple in &self.ripples {
            let Some(shape) = self.shape(ripple, now_ms) else {
                continue;
            };
            let Some(at) = projection.project(ripple.center) else {
                continue;
            };
            surface.begin_path();
            surface.arc(at.x, at.y, shape.radius, 0.0, TAU, false);
            surface.set_stroke_style(&ripple.color.css(palette, shape.opacity));
            surface.set_line_width(self.line_width);
            surface.stroke();
        }
    }
}
