//! Plane geometry shared by edge weighting and the straight-line heuristic.
//!
//! Edge costs derived from coordinates and the Euclidean heuristic MUST use
//! the same unit divisor. If they diverge the heuristic stops being
//! admissible and A* may return a non-optimal path.

use super::Cost;

/// Unit distance of the reference configuration (one node diameter, in pixels).
pub const DEFAULT_UNIT_DISTANCE: i64 = 32;

/// A 2-D position in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Straight-line distance between two points.
#[must_use]
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}

/// Convert a raw distance to an integer cost: `round(distance / unit)`.
///
/// `unit` must be positive; callers validate it before reaching here.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn unit_cost(distance: f64, unit: i64) -> Cost {
    (distance / unit as f64).round() as Cost
}

/// Cost between two points in `unit`s.
#[must_use]
pub fn scaled_distance(a: Point, b: Point, unit: i64) -> Cost {
    unit_cost(euclidean_distance(a, b), unit)
}

/// Whether `(a1, b1)` and `(a2, b2)` name the same undirected pair.
#[must_use]
pub fn is_same_pair<T: PartialEq>(a1: &T, b1: &T, a2: &T, b2: &T) -> bool {
    (a1 == a2 && b1 == b2) || (a1 == b2 && b1 == a2)
}
