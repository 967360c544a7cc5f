//! Proximity-based removal: pick the marker a secondary click refers to.

use super::points::{Point, PointKind, PointStore};

/// Maximum distance (plane units) between a click and a marker for the
/// marker to be picked. A marker at exactly this distance is not picked.
pub const ACCEPTANCE_RADIUS: f64 = 0.05;

/// Closest point in `points` to `query` and its distance. Ties keep the
/// earliest entry. An empty slice yields `(None, f64::INFINITY)`.
pub fn closest_point(points: &[Point], query: Point) -> (Option<Point>, f64) {
    let mut closest = None;
    let mut closest_distance = f64::INFINITY;
    for p in points {
        let d = p.distance_to(query);
        if d < closest_distance {
            closest_distance = d;
            closest = Some(*p);
        }
    }
    (closest, closest_distance)
}

/// Find the marker a removal click at `query` should delete.
///
/// Zeros and poles are scanned independently. The nearest zero is checked
/// against [`ACCEPTANCE_RADIUS`] first and wins whenever it qualifies, even
/// if a pole is closer; only then is the nearest pole considered.
pub fn find_removal_candidate(store: &PointStore, query: Point) -> Option<(PointKind, Point)> {
    find_removal_candidate_within(store, query, ACCEPTANCE_RADIUS)
}

/// Same as [`find_removal_candidate`] with an explicit radius.
pub fn find_removal_candidate_within(
    store: &PointStore,
    query: Point,
    radius: f64,
) -> Option<(PointKind, Point)> {
    let (zero, zero_distance) = closest_point(store.zeros(), query);
    let (pole, pole_distance) = closest_point(store.poles(), query);

    if zero_distance < radius {
        return zero.map(|p| (PointKind::Zero, p));
    }
    if pole_distance < radius {
        return pole.map(|p| (PointKind::Pole, p));
    }
    None
}
