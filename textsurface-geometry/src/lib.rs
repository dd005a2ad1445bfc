//! Geometric types and point-density normalization for `TextSurface`.
//!
//! This crate is intentionally independent of fonts and outline parsing —
//! everything here operates on plain point sequences. Bridging from glyph
//! outlines happens in the consuming crates (`textsurface-outline`,
//! `textsurface-core`).

pub mod bbox;
pub mod density;
pub mod types;

pub use bbox::BoundingBox;
pub use density::normalize;
pub use types::{Polyline, Scalar, EPSILON};
