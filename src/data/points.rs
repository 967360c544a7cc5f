//! Zero/pole storage.
//!
//! [`PointStore`] owns the two independent sequences the editor works on.
//! Insertion order is kept so redraws are deterministic; coincident entries
//! are allowed and stand for a root of multiplicity two.

use std::fmt;

/// A point on the complex plane: real part `re`, imaginary part `im`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub re: f64,
    pub im: f64,
}

impl Point {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Mirror across the real axis.
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        ((self.re - other.re).powi(2) + (self.im - other.im).powi(2)).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Plot-space representation as used by `egui_plot`.
    pub fn to_array(self) -> [f64; 2] {
        [self.re, self.im]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 (mirror of a real-axis point) prints as +0.000j
        if self.im < 0.0 {
            write!(f, "{:.3} - {:.3}j", self.re, -self.im)
        } else {
            write!(f, "{:.3} + {:.3}j", self.re, self.im.abs())
        }
    }
}

/// Which of the two collections a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    Zero,
    Pole,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointKind::Zero => write!(f, "zero"),
            PointKind::Pole => write!(f, "pole"),
        }
    }
}

/// Owned copy of both collections, handed to renderers that must not hold a
/// borrow of the live store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsSnapshot {
    pub zeros: Vec<Point>,
    pub poles: Vec<Point>,
}

#[derive(Debug, Clone, Default)]
pub struct PointStore {
    zeros: Vec<Point>,
    poles: Vec<Point>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zero(&mut self, p: Point) {
        self.zeros.push(p);
    }

    pub fn add_pole(&mut self, p: Point) {
        self.poles.push(p);
    }

    pub fn add(&mut self, kind: PointKind, p: Point) {
        match kind {
            PointKind::Zero => self.add_zero(p),
            PointKind::Pole => self.add_pole(p),
        }
    }

    /// Remove the first zero equal to `p`. Returns `false` (and changes
    /// nothing) when no such zero exists.
    pub fn remove_zero(&mut self, p: Point) -> bool {
        remove_first(&mut self.zeros, p)
    }

    /// Remove the first pole equal to `p`. Returns `false` (and changes
    /// nothing) when no such pole exists.
    pub fn remove_pole(&mut self, p: Point) -> bool {
        remove_first(&mut self.poles, p)
    }

    pub fn remove(&mut self, kind: PointKind, p: Point) -> bool {
        match kind {
            PointKind::Zero => self.remove_zero(p),
            PointKind::Pole => self.remove_pole(p),
        }
    }

    pub fn clear_zeros(&mut self) {
        self.zeros.clear();
    }

    pub fn clear_poles(&mut self) {
        self.poles.clear();
    }

    pub fn clear_all(&mut self) {
        self.clear_zeros();
        self.clear_poles();
    }

    pub fn zeros(&self) -> &[Point] {
        &self.zeros
    }

    pub fn poles(&self) -> &[Point] {
        &self.poles
    }

    pub fn points(&self, kind: PointKind) -> &[Point] {
        match kind {
            PointKind::Zero => &self.zeros,
            PointKind::Pole => &self.poles,
        }
    }

    /// Total number of markers across both collections.
    pub fn len(&self) -> usize {
        self.zeros.len() + self.poles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zeros.is_empty() && self.poles.is_empty()
    }

    pub fn snapshot(&self) -> PointsSnapshot {
        PointsSnapshot {
            zeros: self.zeros.clone(),
            poles: self.poles.clone(),
        }
    }
}

fn remove_first(points: &mut Vec<Point>, p: Point) -> bool {
    match points.iter().position(|q| *q == p) {
        Some(idx) => {
            points.remove(idx);
            true
        }
        None => false,
    }
}
