//! Vectorization errors.

use std::fmt;

/// Errors that can occur when vectorizing an outline path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// The path string produced no contours despite carrying data.
    MalformedPath(String),
}

impl fmt::Display for VectorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPath(path) => write!(f, "malformed outline path: {path:?}"),
        }
    }
}

impl std::error::Error for VectorizeError {}
