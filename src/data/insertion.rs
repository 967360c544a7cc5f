//! Mode-driven insertion, including conjugate mirroring.

use super::mode::EditMode;
use super::points::{Point, PointKind, PointStore};

/// Apply a primary click at `(x, y)` under `mode`.
///
/// | mode         | inserted                                  |
/// | ------------ | ----------------------------------------- |
/// | `Zero`       | zero `(x, y)`, plus `(x, -y)` if `conjugate` |
/// | `Pole`       | pole `(x, y)`, plus `(x, -y)` if `conjugate` |
/// | `DoubleZero` | zeros `(x, y)` and `(x, -y)`               |
/// | `DoublePole` | poles `(x, y)` and `(x, -y)`               |
/// | `None`       | nothing                                   |
///
/// The double modes always mirror; `conjugate` is ignored for them.
/// Returns the number of points added.
pub fn handle_primary_click(
    store: &mut PointStore,
    mode: EditMode,
    x: f64,
    y: f64,
    conjugate: bool,
) -> usize {
    let p = Point::new(x, y);
    match mode {
        EditMode::Zero => add_single(store, PointKind::Zero, p, conjugate),
        EditMode::Pole => add_single(store, PointKind::Pole, p, conjugate),
        EditMode::DoubleZero => add_pair(store, PointKind::Zero, p),
        EditMode::DoublePole => add_pair(store, PointKind::Pole, p),
        EditMode::None => 0,
    }
}

/// Kind of marker a mode inserts, if any.
pub fn inserted_kind(mode: EditMode) -> Option<PointKind> {
    match mode {
        EditMode::Zero | EditMode::DoubleZero => Some(PointKind::Zero),
        EditMode::Pole | EditMode::DoublePole => Some(PointKind::Pole),
        EditMode::None => None,
    }
}

fn add_single(store: &mut PointStore, kind: PointKind, p: Point, conjugate: bool) -> usize {
    if conjugate {
        add_pair(store, kind, p)
    } else {
        store.add(kind, p);
        1
    }
}

fn add_pair(store: &mut PointStore, kind: PointKind, p: Point) -> usize {
    store.add(kind, p);
    store.add(kind, p.conjugate());
    2
}
