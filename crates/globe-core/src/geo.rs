//! Spherical geometry on lon/lat degrees.
//!
//! Unit vectors use the d3-geo cartesian convention: x towards (0°, 0°),
//! y towards (90°E, 0°), z towards the north pole.

use glam::DVec3;

/// Geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

pub type Ring = Vec<LonLat>;
/// Exterior ring followed by any hole rings.
pub type Polygon = Vec<Ring>;

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn to_unit(self) -> DVec3 {
        let (sin_lon, cos_lon) = self.lon.to_radians().sin_cos();
        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    pub fn from_unit(v: DVec3) -> Self {
        let lat = (v.z / v.length()).clamp(-1.0, 1.0).asin();
        Self::new(v.y.atan2(v.x).to_degrees(), lat.to_degrees())
    }
}

/// Great-circle angular distance in radians (haversine form).
pub fn geodesic_distance(a: LonLat, b: LonLat) -> f64 {
    let (lat0, lat1) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = lat1 - lat0;
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat0.cos() * lat1.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin()
}

/// Point at fraction `t` along the great circle from `a` to `b`.
pub fn interpolate(a: LonLat, b: LonLat, t: f64) -> LonLat {
    let (va, vb) = (a.to_unit(), b.to_unit());
    LonLat::from_unit(slerp(va, vb, t))
}

/// Spherical linear interpolation between unit vectors.
pub fn slerp(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    let omega = a.dot(b).clamp(-1.0, 1.0).acos();
    let s = omega.sin();
    if s < 1e-12 {
        return a.lerp(b, t).normalize_or_zero();
    }
    let wa = ((1.0 - t) * omega).sin() / s;
    let wb = (t * omega).sin() / s;
    a * wa + b * wb
}

/// Spherical centroid of a set of polygons, weighted by area.
///
/// Each ring edge contributes its cross product scaled by the edge's angular
/// length; exterior rings are clockwise, so the sum points at the interior.
/// Degenerate input falls back to the mean vertex direction.
pub fn centroid(polygons: &[Polygon]) -> LonLat {
    let mut area = DVec3::ZERO;
    let mut mean = DVec3::ZERO;
    for ring in polygons.iter().flatten() {
        let Some(first) = ring.first() else {
            continue;
        };
        let mut prev = first.to_unit();
        for p in ring.iter().skip(1).chain(std::iter::once(first)) {
            let cur = p.to_unit();
            let cross = prev.cross(cur);
            let m = cross.length();
            if m > 0.0 {
                let w = m.min(1.0).asin();
                area -= cross * (w / m);
            }
            mean += cur;
            prev = cur;
        }
    }
    if area.length() > 1e-12 {
        LonLat::from_unit(area)
    } else if mean.length() > 1e-12 {
        LonLat::from_unit(mean)
    } else {
        polygons
            .iter()
            .flatten()
            .flatten()
            .next()
            .copied()
            .unwrap_or_default()
    }
}

/// Planar even-odd containment in lon/lat space.
pub fn ring_contains(ring: &[LonLat], p: LonLat) -> bool {
    let Some(last) = ring.last() else {
        return false;
    };
    let (mut x0, mut y0) = (last.lon, last.lat);
    let mut inside = false;
    for q in ring {
        let (x1, y1) = (q.lon, q.lat);
        if (y1 > p.lat) != (y0 > p.lat) && p.lon < (x0 - x1) * (p.lat - y1) / (y0 - y1) + x1 {
            inside = !inside;
        }
        x0 = x1;
        y0 = y1;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn square(lon: f64, lat: f64, half: f64) -> Ring {
        // clockwise on a north-up map, closed
        vec![
            LonLat::new(lon - half, lat - half),
            LonLat::new(lon - half, lat + half),
            LonLat::new(lon + half, lat + half),
            LonLat::new(lon + half, lat - half),
            LonLat::new(lon - half, lat - half),
        ]
    }

    #[test]
    fn unit_vector_round_trip() {
        let p = LonLat::new(-9.1, 38.7);
        let q = LonLat::from_unit(p.to_unit());
        assert_close(q.lon, p.lon, 1e-9);
        assert_close(q.lat, p.lat, 1e-9);
    }

    #[test]
    fn quarter_circle_distance() {
        let d = geodesic_distance(LonLat::new(0.0, 0.0), LonLat::new(90.0, 0.0));
        assert_close(d, std::f64::consts::FRAC_PI_2, 1e-12);
        let d = geodesic_distance(LonLat::new(0.0, 0.0), LonLat::new(0.0, 90.0));
        assert_close(d, std::f64::consts::FRAC_PI_2, 1e-12);
    }

    #[test]
    fn midpoint_on_equator() {
        let m = interpolate(LonLat::new(10.0, 0.0), LonLat::new(50.0, 0.0), 0.5);
        assert_close(m.lon, 30.0, 1e-9);
        assert_close(m.lat, 0.0, 1e-9);
    }

    #[test]
    fn centroid_of_small_square() {
        let c = centroid(&[vec![square(20.0, 10.0, 1.0)]]);
        assert_close(c.lon, 20.0, 1e-3);
        assert_close(c.lat, 10.0, 5e-2);
    }

    #[test]
    fn centroid_prefers_larger_polygon() {
        let c = centroid(&[
            vec![square(0.0, 0.0, 5.0)],
            vec![square(40.0, 0.0, 0.5)],
        ]);
        assert!(c.lon > 0.0 && c.lon < 5.0, "centroid lon {}", c.lon);
    }

    #[test]
    fn ring_containment() {
        let ring = square(0.0, 0.0, 2.0);
        assert!(ring_contains(&ring, LonLat::new(0.5, -0.5)));
        assert!(!ring_contains(&ring, LonLat::new(3.0, 0.0)));
        assert!(!ring_contains(&[], LonLat::new(0.0, 0.0)));
    }
}
