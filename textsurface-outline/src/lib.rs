//! Glyph outline vectorization for `TextSurface`.
//!
//! Converts an outline path string (the compact textual description of a
//! glyph's vector outline, SVG `d`-attribute syntax) into polylines.
//! The [`Vectorize`] trait is the seam the orchestrator programs against;
//! [`SvgPathVectorizer`] is the production implementation, a thin wrapper
//! over the `svg_path_parser` crate, which flattens curve commands into
//! point runs.

pub mod error;

use kurbo::Point;
use textsurface_geometry::Polyline;

pub use error::VectorizeError;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// The polylines extracted from one outline path string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineCollection {
    pub lines: Vec<Polyline>,
}

/// Converter from outline path strings to polylines.
///
/// Implementations must be deterministic and pure: the same path string
/// always yields the same collection, with no side effects.
pub trait Vectorize {
    /// Vectorize a single path string.
    ///
    /// # Errors
    ///
    /// Returns [`VectorizeError::MalformedPath`] if the path string cannot
    /// be interpreted as an outline.
    fn convert(&self, path: &str) -> Result<LineCollection, VectorizeError>;
}

// ---------------------------------------------------------------------------
// SVG path implementation
// ---------------------------------------------------------------------------

/// Vectorizer for SVG path syntax.
///
/// An empty (or whitespace-only) path string is valid and yields an empty
/// collection — glyphs without ink, such as spaces, produce empty path
/// strings. A non-empty string from which no contour can be extracted is
/// rejected as malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgPathVectorizer;

impl Vectorize for SvgPathVectorizer {
    fn convert(&self, path: &str) -> Result<LineCollection, VectorizeError> {
        let contours = svg_path_parser::parse(path).collect::<Vec<(bool, Vec<(f64, f64)>)>>();

        if contours.is_empty() && !path.trim().is_empty() {
            return Err(VectorizeError::MalformedPath(path.to_owned()));
        }

        let lines = contours
            .into_iter()
            .map(|(is_closed, points)| {
                Polyline::new(
                    points.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
                    is_closed,
                )
            })
            .collect();

        Ok(LineCollection { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_yields_empty_collection() {
        let result = SvgPathVectorizer.convert("").expect("empty path is valid");
        assert!(result.lines.is_empty());

        let result = SvgPathVectorizer.convert("   ").expect("blank path is valid");
        assert!(result.lines.is_empty());
    }

    #[test]
    fn open_segment() {
        let result = SvgPathVectorizer
            .convert("M 0 0 L 10 0")
            .expect("valid path");
        assert_eq!(result.lines.len(), 1);
        let line = &result.lines[0];
        assert!(!line.is_closed);
        assert_eq!(line.points.first(), Some(&Point::new(0.0, 0.0)));
        assert_eq!(line.points.last(), Some(&Point::new(10.0, 0.0)));
    }

    #[test]
    fn closed_contour_sets_flag() {
        let result = SvgPathVectorizer
            .convert("M 0 0 L 10 0 L 10 10 Z")
            .expect("valid path");
        assert_eq!(result.lines.len(), 1);
        assert!(result.lines[0].is_closed);
    }

    #[test]
    fn multiple_subpaths() {
        let result = SvgPathVectorizer
            .convert("M 0 0 L 10 0 M 20 0 L 30 0")
            .expect("valid path");
        assert_eq!(result.lines.len(), 2);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = SvgPathVectorizer
            .convert("# # #")
            .expect_err("no contour can come of this");
        assert!(matches!(err, VectorizeError::MalformedPath(_)));
    }
}
