//! Glyph layout orchestration for `TextSurface`.
//!
//! Takes a font-load request — shaped text, per-glyph outline path strings,
//! precomputed text metrics — and produces a render-friendly response: a
//! flat density-normalized vertex sequence plus the retained (scaled)
//! contour polylines, tagged with the request's correlation fields.
//!
//! The orchestrator is pure and stateless: concurrent [`process`] calls
//! share nothing but immutable constants, and a request either yields a
//! complete response or fails as a whole. Staleness of responses (superseded
//! `iteration` values) is the caller's concern, keyed off the echoed field.
//!
//! [`process`]: GlyphProcessor::process

pub mod error;
pub mod message;
pub mod processor;

pub use error::ProcessError;
pub use message::{FontLoadRequest, FontLoadResponse, Request, Response};
pub use processor::{GlyphProcessor, MAX_DIST, MIN_DIST};
