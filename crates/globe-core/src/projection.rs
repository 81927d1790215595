//! Orthographic projection with d3-style three-axis rotation.
//!
//! Rotation `[λ, φ, γ]` (degrees) adds λ to longitude, tilts by φ and then
//! rolls by γ. After rotation the x axis points at the viewer: a point is on
//! the visible hemisphere iff its view-space x is positive, and it lands on
//! screen at `(tx + k·y, ty − k·z)`.

use crate::constants::{DEFAULT_SCALE, DEFAULT_TRANSLATE, FALLBACK_VIEW_SIZE};
use crate::geo::LonLat;
use glam::{DMat3, DVec3};

/// Canvas pixel position.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct Projection {
    rotation: [f64; 3],
    scale: f64,
    translate: ScreenPoint,
    // cached world -> view matrix for `rotation`
    view: DMat3,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new()
    }
}

impl Projection {
    pub fn new() -> Self {
        Self {
            rotation: [0.0; 3],
            scale: DEFAULT_SCALE,
            translate: ScreenPoint::new(DEFAULT_TRANSLATE[0], DEFAULT_TRANSLATE[1]),
            view: DMat3::IDENTITY,
        }
    }

    pub fn rotation(&self) -> [f64; 3] {
        self.rotation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> ScreenPoint {
        self.translate
    }

    /// Additive rotation. Stored angles are never wrapped.
    pub fn rotate(&mut self, delta_lon: f64, delta_lat: f64) {
        self.rotation[0] += delta_lon;
        self.rotation[1] += delta_lat;
        self.update_view();
    }

    pub fn set_rotation(&mut self, lon: f64, lat: f64, roll: f64) {
        self.rotation = [lon, lat, roll];
        self.update_view();
    }

    /// Fit the globe into a `width` x `height` viewport. Non-positive sizes are
    /// replaced with a fallback so the scale never collapses to zero. Returns
    /// the dimensions actually used.
    pub fn rescale(&mut self, width: f64, height: f64) -> (f64, f64) {
        let w = if width > 0.0 { width } else { FALLBACK_VIEW_SIZE };
        let h = if height > 0.0 { height } else { FALLBACK_VIEW_SIZE };
        self.scale = w.min(h) / 2.0;
        self.translate = ScreenPoint::new(w / 2.0, h / 2.0);
        (w, h)
    }

    /// World unit vector into view space (x towards the viewer).
    #[inline]
    pub fn to_view(&self, v: DVec3) -> DVec3 {
        self.view * v
    }

    /// Screen position of a view-space vector, ignoring visibility.
    #[inline]
    pub fn view_to_screen(&self, v: DVec3) -> ScreenPoint {
        ScreenPoint::new(
            self.translate.x + self.scale * v.y,
            self.translate.y - self.scale * v.z,
        )
    }

    pub fn is_visible(&self, p: LonLat) -> bool {
        self.to_view(p.to_unit()).x > 0.0
    }

    /// Screen position of `p`, or `None` when it lies on the far hemisphere.
    pub fn project(&self, p: LonLat) -> Option<ScreenPoint> {
        let v = self.to_view(p.to_unit());
        (v.x > 0.0).then(|| self.view_to_screen(v))
    }

    /// Geographic position under a screen pixel, or `None` off the disc.
    pub fn invert(&self, s: ScreenPoint) -> Option<LonLat> {
        if self.scale <= 0.0 {
            return None;
        }
        let y = (s.x - self.translate.x) / self.scale;
        let z = (self.translate.y - s.y) / self.scale;
        let rho2 = y * y + z * z;
        if !rho2.is_finite() || rho2 > 1.0 {
            return None;
        }
        let v = DVec3::new((1.0 - rho2).sqrt(), y, z);
        Some(normalize_lon(LonLat::from_unit(self.view.transpose() * v)))
    }

    /// Geographic point currently at the center of the disc.
    pub fn view_center(&self) -> LonLat {
        normalize_lon(LonLat::from_unit(self.view.transpose() * DVec3::X))
    }

    fn update_view(&mut self) {
        let [lambda, phi, gamma] = self.rotation.map(|a| a.rem_euclid(360.0).to_radians());
        self.view = DMat3::from_rotation_x(gamma)
            * DMat3::from_rotation_y(-phi)
            * DMat3::from_rotation_z(lambda);
    }
}

fn normalize_lon(p: LonLat) -> LonLat {
    let lon = (p.lon + 180.0).rem_euclid(360.0) - 180.0;
    LonLat::new(lon, p.lat)
}
