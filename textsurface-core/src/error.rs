//! Orchestration errors.

use std::fmt;

use textsurface_outline::VectorizeError;

/// Errors produced while processing a font-load request.
///
/// There is no per-glyph recovery: one failed path string aborts the whole
/// request, and no partial response is constructed. Geometry processing is
/// deterministic, so there is no internal retry either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// The outline vectorizer rejected the path string of one glyph.
    Vectorize {
        /// Index of the failing glyph within the request's path strings.
        glyph: usize,
        source: VectorizeError,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vectorize { glyph, source } => {
                write!(f, "vectorizing glyph {glyph}: {source}")
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Vectorize { source, .. } => Some(source),
        }
    }
}
