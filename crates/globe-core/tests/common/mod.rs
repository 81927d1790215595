// Small hand-built world shared by the integration tests.

#![allow(dead_code)]

use globe_core::{Country, GlobeConfig, Globe, LonLat, NameTable, Ring, World};

pub const PORTUGAL: usize = 0;
pub const BRAZIL: usize = 1;
pub const JAPAN: usize = 2;
pub const FRANCE: usize = 3;
pub const UNNAMED: usize = 4;

pub const NAMES_TSV: &str = "id\tname\n620\tPortugal\n076\tBrazil\n392\tJapan\n250\tFrance\n";

/// Closed ring, clockwise on a north-up map.
pub fn square(lon: f64, lat: f64, half: f64) -> Ring {
    vec![
        LonLat::new(lon - half, lat - half),
        LonLat::new(lon - half, lat + half),
        LonLat::new(lon + half, lat + half),
        LonLat::new(lon + half, lat - half),
        LonLat::new(lon - half, lat - half),
    ]
}

pub fn world() -> World {
    let countries = vec![
        Country {
            id: Some(620),
            polygons: vec![vec![square(-8.0, 39.5, 1.5)]],
        },
        Country {
            id: Some(76),
            polygons: vec![vec![square(-52.0, -10.0, 8.0)]],
        },
        Country {
            id: Some(392),
            polygons: vec![vec![square(138.0, 36.0, 3.0)]],
        },
        Country {
            id: Some(250),
            // exterior with a hole in the middle
            polygons: vec![vec![square(0.0, 45.0, 4.0), square(0.0, 45.0, 1.0)]],
        },
        Country {
            id: Some(999),
            polygons: vec![vec![square(30.0, 0.0, 2.0)]],
        },
    ];
    let land = countries
        .iter()
        .flat_map(|c| c.polygons.iter().cloned())
        .collect();
    World { land, countries }
}

pub fn names() -> NameTable {
    NameTable::from_tsv(NAMES_TSV).unwrap()
}

pub fn globe(destination: &str) -> Globe {
    let mut g = Globe::new(GlobeConfig::default(), world(), names(), destination);
    g.resize(800.0, 800.0);
    g
}

pub fn assert_close(a: f64, b: f64, eps: f64) {
    let diff = (a - b).abs();
    assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
}
