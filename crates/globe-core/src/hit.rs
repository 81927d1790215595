//! Screen position to country lookup.

use crate::geo::{ring_contains, LonLat};
use crate::projection::{Projection, ScreenPoint};
use crate::topo::Country;

/// True if any ring of the country contains `p`.
///
/// Hole rings count as hits too, so a point inside a hole still selects the
/// surrounding country.
pub fn point_in_feature(p: LonLat, country: &Country) -> bool {
    country
        .polygons
        .iter()
        .flatten()
        .any(|ring| ring_contains(ring, p))
}

/// Index of the first country under `at`, if the pointer is over the globe.
pub fn country_at(projection: &Projection, countries: &[Country], at: ScreenPoint) -> Option<usize> {
    let p = projection.invert(at)?;
    countries.iter().position(|c| point_in_feature(p, c))
}

/// Outcome of a hover update when the hovered country changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverChange {
    pub country: Option<usize>,
    /// Display name for the label; empty when nothing (or an unnamed
    /// country) is hovered.
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Record the country under the pointer; returns whether it changed.
    pub fn update(&mut self, found: Option<usize>) -> bool {
        let changed = found != self.current;
        self.current = found;
        changed
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
