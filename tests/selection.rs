use zplane::data::points::{Point, PointKind, PointStore};
use zplane::data::selection::*;

#[test]
fn zero_wins_when_both_qualify() {
    let mut store = PointStore::new();
    store.add_zero(Point::new(0.1, 0.1));
    store.add_pole(Point::new(0.1, 0.1000001));
    let hit = find_removal_candidate(&store, Point::new(0.1, 0.1));
    assert_eq!(hit, Some((PointKind::Zero, Point::new(0.1, 0.1))));
}

#[test]
fn zero_wins_even_if_pole_is_closer() {
    let mut store = PointStore::new();
    store.add_zero(Point::new(0.04, 0.0));
    store.add_pole(Point::new(0.0, 0.0));
    let hit = find_removal_candidate(&store, Point::new(0.0, 0.0));
    assert_eq!(hit, Some((PointKind::Zero, Point::new(0.04, 0.0))));
}

#[test]
fn pole_is_selected_when_no_zero_qualifies() {
    let mut store = PointStore::new();
    store.add_zero(Point::new(0.5, 0.5));
    store.add_pole(Point::new(0.01, 0.0));
    let hit = find_removal_candidate(&store, Point::new(0.0, 0.0));
    assert_eq!(hit, Some((PointKind::Pole, Point::new(0.01, 0.0))));
}

#[test]
fn nothing_within_radius_returns_none() {
    let mut store = PointStore::new();
    store.add_zero(Point::new(0.2, 0.0));
    store.add_pole(Point::new(0.0, 0.2));
    assert_eq!(find_removal_candidate(&store, Point::new(0.0, 0.0)), None);
}

#[test]
fn point_at_exact_radius_is_not_selected() {
    let mut store = PointStore::new();
    store.add_zero(Point::new(ACCEPTANCE_RADIUS, 0.0));
    assert_eq!(find_removal_candidate(&store, Point::new(0.0, 0.0)), None);
}

#[test]
fn empty_store_returns_none() {
    let store = PointStore::new();
    assert_eq!(find_removal_candidate(&store, Point::new(0.0, 0.0)), None);
}

#[test]
fn nearest_of_several_zeros_is_chosen() {
    let mut store = PointStore::new();
    store.add_zero(Point::new(0.03, 0.0));
    store.add_zero(Point::new(0.01, 0.0));
    store.add_zero(Point::new(-0.02, 0.0));
    let hit = find_removal_candidate(&store, Point::new(0.0, 0.0));
    assert_eq!(hit, Some((PointKind::Zero, Point::new(0.01, 0.0))));
}

#[test]
fn closest_point_ties_keep_first() {
    let pts = [Point::new(0.0, 0.1), Point::new(0.1, 0.0)];
    let (p, d) = closest_point(&pts, Point::new(0.0, 0.0));
    assert_eq!(p, Some(Point::new(0.0, 0.1)));
    assert!((d - 0.1).abs() < 1e-12);
}

#[test]
fn closest_point_of_empty_slice_is_infinite() {
    let (p, d) = closest_point(&[], Point::new(0.0, 0.0));
    assert!(p.is_none());
    assert!(d.is_infinite());
}

#[test]
fn explicit_radius_is_respected() {
    let mut store = PointStore::new();
    store.add_pole(Point::new(0.2, 0.0));
    let q = Point::new(0.0, 0.0);
    assert_eq!(find_removal_candidate_within(&store, q, 0.1), None);
    assert_eq!(
        find_removal_candidate_within(&store, q, 0.3),
        Some((PointKind::Pole, Point::new(0.2, 0.0)))
    );
}
