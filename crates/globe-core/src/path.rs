//! Geographic shapes to canvas paths through the orthographic projection.
//!
//! Edges are densified along great circles, rotated into view space and
//! clipped against the visible hemisphere (view x > 0). Where a polygon
//! leaves the hemisphere the clipped outline follows the limb back to the
//! point where it re-enters. Like a canvas path generator, these functions
//! only append subpaths; the caller begins the path and paints it.

use crate::constants::MAX_SEGMENT_DEGREES;
use crate::geo::{slerp, LonLat, Polygon};
use crate::projection::Projection;
use crate::surface::Surface;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

pub struct GeoPath<'a> {
    projection: &'a Projection,
    max_segment: f64,
}

impl<'a> GeoPath<'a> {
    pub fn new(projection: &'a Projection) -> Self {
        Self {
            projection,
            max_segment: MAX_SEGMENT_DEGREES.to_radians(),
        }
    }

    /// Outline of the whole globe disc.
    pub fn sphere(&self, surface: &mut impl Surface) {
        let c = self.projection.translate();
        surface.arc(c.x, c.y, self.projection.scale(), 0.0, TAU, false);
    }

    pub fn polygons(&self, surface: &mut impl Surface, polygons: &[Polygon]) {
        for ring in polygons.iter().flatten() {
            let clipped = self.clip_ring(ring);
            let mut points = clipped.iter().map(|v| self.projection.view_to_screen(*v));
            let Some(first) = points.next() else {
                continue;
            };
            surface.move_to(first.x, first.y);
            for p in points {
                surface.line_to(p.x, p.y);
            }
            surface.close_path();
        }
    }

    /// Polyline along great circles, split into its visible runs.
    pub fn line(&self, surface: &mut impl Surface, points: &[LonLat]) {
        let view = self.densify(points, false);
        let mut prev: Option<DVec3> = None;
        for &cur in &view {
            let cur_in = cur.x > 0.0;
            match prev {
                None if cur_in => self.move_to(surface, cur),
                None => {}
                Some(p) => match (p.x > 0.0, cur_in) {
                    (true, true) => self.line_to(surface, cur),
                    (true, false) => self.line_to(surface, limb_crossing(p, cur)),
                    (false, true) => {
                        self.move_to(surface, limb_crossing(p, cur));
                        self.line_to(surface, cur);
                    }
                    (false, false) => {}
                },
            }
            prev = Some(cur);
        }
    }

    fn move_to(&self, surface: &mut impl Surface, v: DVec3) {
        let s = self.projection.view_to_screen(v);
        surface.move_to(s.x, s.y);
    }

    fn line_to(&self, surface: &mut impl Surface, v: DVec3) {
        let s = self.projection.view_to_screen(v);
        surface.line_to(s.x, s.y);
    }

    /// View-space vertices of `points`, with long edges subdivided. A closed
    /// ring keeps its duplicate closing vertex out of the result.
    fn densify(&self, points: &[LonLat], closed: bool) -> Vec<DVec3> {
        let mut world: Vec<DVec3> = points.iter().map(|p| p.to_unit()).collect();
        if closed && world.len() > 1 && world.first() == world.last() {
            world.pop();
        }
        let mut out = Vec::with_capacity(world.len());
        let edges = if closed { world.len() } else { world.len().saturating_sub(1) };
        if !closed {
            if let Some(&first) = world.first() {
                out.push(self.projection.to_view(first));
            }
        }
        for i in 0..edges {
            let a = world[i];
            let b = world[(i + 1) % world.len()];
            let angle = a.dot(b).clamp(-1.0, 1.0).acos();
            let steps = (angle / self.max_segment).ceil().max(1.0) as usize;
            for k in 1..steps {
                out.push(self.projection.to_view(slerp(a, b, k as f64 / steps as f64)));
            }
            out.push(self.projection.to_view(b));
        }
        out
    }

    /// Sutherland-Hodgman against the plane x = 0, closing each exit/entry
    /// pair along the limb.
    fn clip_ring(&self, ring: &[LonLat]) -> Vec<DVec3> {
        let view = self.densify(ring, true);
        let Some(&last) = view.last() else {
            return Vec::new();
        };
        if view.iter().all(|v| v.x > 0.0) {
            return view;
        }

        // (point, is_exit)
        let mut clipped: Vec<(DVec3, bool)> = Vec::new();
        let mut prev = last;
        for &cur in &view {
            match (prev.x > 0.0, cur.x > 0.0) {
                (true, true) => clipped.push((cur, false)),
                (true, false) => clipped.push((limb_crossing(prev, cur), true)),
                (false, true) => {
                    clipped.push((limb_crossing(prev, cur), false));
                    clipped.push((cur, false));
                }
                (false, false) => {}
            }
            prev = cur;
        }

        let mut out = Vec::with_capacity(clipped.len());
        for (i, &(p, is_exit)) in clipped.iter().enumerate() {
            out.push(p);
            if is_exit {
                let (next, _) = clipped[(i + 1) % clipped.len()];
                self.limb_arc(p, next, &mut out);
            }
        }
        out
    }

    /// Intermediate limb points strictly between `from` and `to`, along the
    /// shorter way round.
    fn limb_arc(&self, from: DVec3, to: DVec3, out: &mut Vec<DVec3>) {
        let a0 = from.z.atan2(from.y);
        let mut delta = to.z.atan2(to.y) - a0;
        if delta > PI {
            delta -= TAU;
        } else if delta < -PI {
            delta += TAU;
        }
        let steps = (delta.abs() / self.max_segment).ceil() as usize;
        for k in 1..steps {
            let a = a0 + delta * k as f64 / steps as f64;
            out.push(DVec3::new(0.0, a.cos(), a.sin()));
        }
    }
}

/// Point where the edge `a -> b` crosses the limb (view x = 0). Edges are
/// short after densification, so the chord intersection is projected back to
/// the unit circle.
fn limb_crossing(a: DVec3, b: DVec3) -> DVec3 {
    let t = a.x / (a.x - b.x);
    let p = a + (b - a) * t;
    let yz = glam::DVec2::new(p.y, p.z).normalize_or_zero();
    DVec3::new(0.0, yz.x, yz.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, Recording};

    fn square(lon: f64, lat: f64, half: f64) -> Vec<LonLat> {
        vec![
            LonLat::new(lon - half, lat - half),
            LonLat::new(lon - half, lat + half),
            LonLat::new(lon + half, lat + half),
            LonLat::new(lon + half, lat - half),
            LonLat::new(lon - half, lat - half),
        ]
    }

    fn points(rec: &Recording) -> Vec<(f64, f64)> {
        rec.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::MoveTo { x, y } | DrawOp::LineTo { x, y } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    fn projection() -> Projection {
        let mut p = Projection::new();
        p.rescale(400.0, 400.0);
        p
    }

    #[test]
    fn visible_ring_is_closed_subpath() {
        let p = projection();
        let mut rec = Recording::new();
        GeoPath::new(&p).polygons(&mut rec, &[vec![square(0.0, 0.0, 1.0)]]);
        assert_eq!(rec.count(|op| matches!(op, DrawOp::MoveTo { .. })), 1);
        assert_eq!(rec.count(|op| matches!(op, DrawOp::ClosePath)), 1);
        for (x, y) in points(&rec) {
            assert!((x - 200.0).abs() < 5.0 && (y - 200.0).abs() < 5.0);
        }
    }

    #[test]
    fn hidden_ring_draws_nothing() {
        let p = projection();
        let mut rec = Recording::new();
        GeoPath::new(&p).polygons(&mut rec, &[vec![square(180.0, 0.0, 10.0)]]);
        assert!(rec.ops.is_empty());
    }

    #[test]
    fn straddling_ring_stays_inside_disc() {
        let p = projection();
        let mut rec = Recording::new();
        GeoPath::new(&p).polygons(&mut rec, &[vec![square(90.0, 0.0, 20.0)]]);
        let pts = points(&rec);
        assert!(!pts.is_empty());
        for (x, y) in pts {
            let r = ((x - 200.0).powi(2) + (y - 200.0).powi(2)).sqrt();
            assert!(r <= 200.0 + 1e-6, "point off disc at r={r}");
        }
    }

    #[test]
    fn line_splits_at_limb() {
        let p = projection();
        let mut rec = Recording::new();
        // from the front, over the back, and into view again
        GeoPath::new(&p).line(
            &mut rec,
            &[LonLat::new(-60.0, 0.0), LonLat::new(180.0, 0.0), LonLat::new(60.0, 0.0)],
        );
        assert_eq!(rec.count(|op| matches!(op, DrawOp::MoveTo { .. })), 2);
    }

    #[test]
    fn sphere_is_full_circle() {
        let p = projection();
        let mut rec = Recording::new();
        GeoPath::new(&p).sphere(&mut rec);
        assert_eq!(
            rec.ops,
            vec![DrawOp::Arc {
                x: 200.0,
                y: 200.0,
                radius: 200.0,
                start: 0.0,
                end: TAU,
                anticlockwise: false
            }]
        );
    }
}
