//! Text measurement for `TextSurface`.
//!
//! This crate wraps `ttf-parser` to provide the aggregate measurements the
//! glyph layout orchestrator consumes: total advance width (with kerning)
//! and the actual/font vertical extents of a shaped string. All values are
//! plain `f64` — bridging to geometry types happens in `textsurface-core`.

pub mod error;
pub mod face;
pub mod metrics;

pub use error::FontError;
pub use face::FontFace;
pub use metrics::{measure_text, MetricsResult, X_SCALE};
