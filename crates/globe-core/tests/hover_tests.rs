// Screen-space hit testing and hover label changes.

mod common;

use common::{globe, FRANCE, PORTUGAL, UNNAMED};
use globe_core::hit::{country_at, point_in_feature};
use globe_core::{LonLat, ScreenPoint};

const CENTER: ScreenPoint = ScreenPoint { x: 400.0, y: 400.0 };

#[test]
fn pointer_over_country_selects_it() {
    let mut g = globe("JAPAN");
    g.projection_mut().set_rotation(8.0, -39.5, 0.0);

    let change = g.hover_at(CENTER).unwrap();
    assert_eq!(change.country, Some(PORTUGAL));
    assert_eq!(change.label, "Portugal");
    assert_eq!(g.hovered(), Some(PORTUGAL));

    // same country again is not a change
    assert!(g.hover_at(ScreenPoint::new(401.0, 399.0)).is_none());
}

#[test]
fn ocean_and_off_disc_clear_the_hover() {
    let mut g = globe("JAPAN");
    g.projection_mut().set_rotation(8.0, -39.5, 0.0);
    g.hover_at(CENTER);

    let change = g.hover_at(ScreenPoint::new(400.0, 200.0)).unwrap();
    assert_eq!(change.country, None);
    assert_eq!(change.label, "");

    assert!(g.hover_at(ScreenPoint::new(2.0, 2.0)).is_none());
    assert_eq!(g.hovered(), None);
}

#[test]
fn hole_counts_as_part_of_the_country() {
    let mut g = globe("JAPAN");
    g.projection_mut().set_rotation(0.0, -45.0, 0.0);
    let france = &g.world().countries[FRANCE];

    assert!(point_in_feature(LonLat::new(0.0, 45.0), france));
    assert!(point_in_feature(LonLat::new(2.5, 45.0), france));
    assert!(!point_in_feature(LonLat::new(10.0, 45.0), france));

    let ring_point = g.projection().project(LonLat::new(2.5, 45.0)).unwrap();
    assert_eq!(
        country_at(g.projection(), &g.world().countries, ring_point),
        Some(FRANCE)
    );
    assert_eq!(g.hover_at(CENTER).unwrap().label, "France");
}

#[test]
fn unnamed_country_has_empty_label() {
    let mut g = globe("JAPAN");
    g.projection_mut().set_rotation(-30.0, 0.0, 0.0);
    let change = g.hover_at(CENTER).unwrap();
    assert_eq!(change.country, Some(UNNAMED));
    assert_eq!(change.label, "");
}

#[test]
fn clear_hover_reports_once() {
    let mut g = globe("JAPAN");
    g.projection_mut().set_rotation(8.0, -39.5, 0.0);
    g.hover_at(CENTER);
    assert_eq!(g.clear_hover().unwrap().country, None);
    assert!(g.clear_hover().is_none());
}
