//! TopoJSON decoding for the world-atlas topology.
//!
//! Only polygonal geometry is kept. Arcs may be quantized (delta-encoded
//! integers plus a `transform`) or plain coordinates.

use crate::error::{GlobeError, Result};
use crate::geo::{LonLat, Polygon, Ring};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: HashMap<String, TopoGeometry>,
}

#[derive(Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum TopoGeometry {
    GeometryCollection {
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<Value>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<Value>,
    },
    #[serde(other)]
    Unsupported,
}

/// One country shape from the `countries` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    /// Numeric id, normalized from either a string ("076") or a number.
    pub id: Option<i32>,
    pub polygons: Vec<Polygon>,
}

/// Decoded world geometry.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Every land polygon merged into one multipolygon.
    pub land: Vec<Polygon>,
    pub countries: Vec<Country>,
}

impl World {
    /// Decode the `land` and `countries` objects of a world-atlas topology.
    pub fn from_topojson(json: &str) -> Result<Self> {
        let topo: Topology = serde_json::from_str(json)?;
        let arcs = decode_arcs(&topo);
        let object = |name: &str| {
            topo.objects
                .get(name)
                .ok_or_else(|| GlobeError::MissingObject(name.to_string()))
        };

        let mut land = Vec::new();
        collect_polygons(object("land")?, &arcs, &mut land)?;

        let mut countries = Vec::new();
        collect_countries(object("countries")?, &arcs, &mut countries)?;

        log::info!(
            "[load] world decoded: {} land polygons, {} countries",
            land.len(),
            countries.len()
        );
        Ok(Self { land, countries })
    }
}

/// Canonical integer key for a TopoJSON id value.
pub fn normalize_id(id: &Value) -> Option<i32> {
    match id {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn decode_arcs(topo: &Topology) -> Vec<Vec<LonLat>> {
    topo.arcs
        .iter()
        .map(|arc| match &topo.transform {
            Some(t) => {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .filter(|p| p.len() >= 2)
                    .map(|p| {
                        x += p[0];
                        y += p[1];
                        LonLat::new(x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
                    })
                    .collect()
            }
            None => arc
                .iter()
                .filter(|p| p.len() >= 2)
                .map(|p| LonLat::new(p[0], p[1]))
                .collect(),
        })
        .collect()
}

fn ring(indices: &[i64], arcs: &[Vec<LonLat>]) -> Result<Ring> {
    let mut points: Ring = Vec::new();
    for &index in indices {
        let slot = if index < 0 { !index } else { index };
        let arc = usize::try_from(slot)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or(GlobeError::ArcIndex {
                index,
                count: arcs.len(),
            })?;
        // consecutive arcs share their joint point
        if !points.is_empty() {
            points.pop();
        }
        if index < 0 {
            points.extend(arc.iter().rev().copied());
        } else {
            points.extend(arc.iter().copied());
        }
    }
    if points.len() < 4 {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }
    Ok(points)
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<LonLat>]) -> Result<Polygon> {
    rings.iter().map(|r| ring(r, arcs)).collect()
}

fn collect_polygons(geom: &TopoGeometry, arcs: &[Vec<LonLat>], out: &mut Vec<Polygon>) -> Result<()> {
    match geom {
        TopoGeometry::GeometryCollection { geometries } => {
            for g in geometries {
                collect_polygons(g, arcs, out)?;
            }
        }
        TopoGeometry::Polygon { arcs: rings, .. } => out.push(polygon(rings, arcs)?),
        TopoGeometry::MultiPolygon { arcs: polys, .. } => {
            for rings in polys {
                out.push(polygon(rings, arcs)?);
            }
        }
        TopoGeometry::Unsupported => {}
    }
    Ok(())
}

fn collect_countries(geom: &TopoGeometry, arcs: &[Vec<LonLat>], out: &mut Vec<Country>) -> Result<()> {
    match geom {
        TopoGeometry::GeometryCollection { geometries } => {
            for g in geometries {
                collect_countries(g, arcs, out)?;
            }
        }
        TopoGeometry::Polygon { arcs: rings, id } => out.push(Country {
            id: id.as_ref().and_then(normalize_id),
            polygons: vec![polygon(rings, arcs)?],
        }),
        TopoGeometry::MultiPolygon { arcs: polys, id } => out.push(Country {
            id: id.as_ref().and_then(normalize_id),
            polygons: polys
                .iter()
                .map(|rings| polygon(rings, arcs))
                .collect::<Result<_>>()?,
        }),
        TopoGeometry::Unsupported => {}
    }
    Ok(())
}
