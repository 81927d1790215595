//! Origin/destination resolution and the route arc between them.

use crate::constants::{FALLBACK_COUNTRY, FALLBACK_SUFFIX, ORIGIN_COUNTRY};
use crate::geo::{centroid, interpolate, LonLat};
use crate::names::NameTable;
use crate::topo::Country;

/// Great-circle connector between the two highlighted countries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteArc {
    pub from: LonLat,
    pub to: LonLat,
}

impl RouteArc {
    pub fn midpoint(&self) -> LonLat {
        interpolate(self.from, self.to, 0.5)
    }
}

/// Countries highlighted on the globe, as indices into the country list.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub origin: Option<usize>,
    pub destination: Option<usize>,
    /// Name shown in the destination card; carries a "(Fallback)" marker when
    /// the requested destination was not found.
    pub destination_name: String,
    pub arc: Option<RouteArc>,
}

impl Selection {
    /// Resolve the fixed origin and the requested destination (matched
    /// case-insensitively against display names).
    pub fn resolve(countries: &[Country], names: &NameTable, destination: &str) -> Self {
        let find = |pred: &dyn Fn(&str) -> bool| {
            countries
                .iter()
                .position(|c| c.id.and_then(|id| names.get(id)).is_some_and(pred))
        };
        let wanted = destination.trim().to_uppercase();

        let origin = find(&|n: &str| n == ORIGIN_COUNTRY);
        let mut destination_name = wanted.clone();
        let mut dest = find(&|n: &str| n.to_uppercase() == wanted);
        if dest.is_none() {
            log::warn!(
                "[load] destination \"{}\" not found, using {} as fallback",
                wanted,
                FALLBACK_COUNTRY
            );
            dest = find(&|n: &str| n == FALLBACK_COUNTRY);
            destination_name = format!("{FALLBACK_COUNTRY}{FALLBACK_SUFFIX}");
        }

        let arc = origin.zip(dest).map(|(o, d)| RouteArc {
            from: centroid(&countries[o].polygons),
            to: centroid(&countries[d].polygons),
        });

        Self {
            origin,
            destination: dest,
            destination_name,
            arc,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.destination_name.ends_with(FALLBACK_SUFFIX)
    }

    /// True when `index` is the origin or destination country.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.origin == Some(index) || self.destination == Some(index)
    }
}
