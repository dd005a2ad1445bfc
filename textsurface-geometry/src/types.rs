//! Core types shared across the `TextSurface` system.

use kurbo::Point;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Convenience alias. All coordinates are f64 for compatibility with
/// `kurbo` and lossless transit across the WASM boundary.
pub type Scalar = f64;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Scalar = 1e-9;

// ---------------------------------------------------------------------------
// Polyline
// ---------------------------------------------------------------------------

/// An ordered sequence of points, optionally closed.
///
/// When `is_closed` is true the last point implicitly connects back to the
/// first; the closing segment is never materialized as a point pair.
/// Polylines are produced by the outline vectorizer and then transformed
/// into new, separate polylines by the orchestrator — there is no shared
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub is_closed: bool,
    pub points: Vec<Point>,
}

impl Polyline {
    /// Create a polyline from points.
    #[must_use]
    pub const fn new(points: Vec<Point>, is_closed: bool) -> Self {
        Self { is_closed, points }
    }

    /// An open polyline.
    #[must_use]
    pub const fn open(points: Vec<Point>) -> Self {
        Self::new(points, false)
    }

    /// A closed polyline.
    #[must_use]
    pub const fn closed(points: Vec<Point>) -> Self {
        Self::new(points, true)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Derive a new polyline by applying `f` to every point.
    ///
    /// The open/closed flag is preserved.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            is_closed: self.is_closed,
            points: self.points.iter().copied().map(f).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn map_points_preserves_flag() {
        let line = Polyline::closed(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        let doubled = line.map_points(|p| Point::new(p.x * 2.0, p.y));
        assert!(doubled.is_closed);
        assert_eq!(doubled.points[0], Point::new(2.0, 2.0));
        assert_eq!(doubled.points[1], Point::new(6.0, 4.0));
        // Source is untouched.
        assert_eq!(line.points[0], Point::new(1.0, 2.0));
    }

    #[test]
    fn empty_polyline() {
        let line = Polyline::open(Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.len(), 0);
    }

    #[test]
    fn wire_shape() {
        let line = Polyline::open(vec![Point::new(1.5, -2.0)]);
        let json = serde_json::to_value(&line).expect("serialize polyline");
        assert_eq!(
            json,
            serde_json::json!({
                "is_closed": false,
                "points": [{ "x": 1.5, "y": -2.0 }],
            })
        );
    }
}
