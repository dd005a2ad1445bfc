//! The glyph layout orchestrator.

use kurbo::Point;
use textsurface_fonts::X_SCALE;
use textsurface_geometry::{density, BoundingBox};
use textsurface_outline::Vectorize;

use crate::error::ProcessError;
use crate::message::{FontLoadRequest, FontLoadResponse, Request, Response};

/// Minimum spacing between successive sampled vertices.
pub const MIN_DIST: f64 = 5.0;

/// Maximum spacing between successive sampled vertices.
pub const MAX_DIST: f64 = 10.0;

/// Processes font-load requests against an outline vectorizer.
///
/// Holds no per-request state; the same processor can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphProcessor<V> {
    vectorizer: V,
}

impl<V: Vectorize> GlyphProcessor<V> {
    #[must_use]
    pub const fn new(vectorizer: V) -> Self {
        Self { vectorizer }
    }

    /// Route an inbound message to its handler.
    ///
    /// # Errors
    ///
    /// Propagates [`ProcessError`] from request processing.
    pub fn handle(&self, request: &Request) -> Result<Response, ProcessError> {
        match request {
            Request::FontLoadRequest(req) => {
                self.process(req).map(Response::FontLoadResponse)
            }
        }
    }

    /// Process one font-load request into its aggregate response.
    ///
    /// Derives the glyph bounding box and baseline origin from the
    /// request's font-level metrics (whole-font vertical extent, not the
    /// tight ink box), vectorizes every path string, and produces two
    /// independent views of each contour:
    ///
    /// - retained lines: x stretched by [`X_SCALE`], y untouched;
    /// - vertices: x stretched, y translated to the baseline origin, then
    ///   density-normalized to the `[MIN_DIST, MAX_DIST]` band and
    ///   flattened across all contours of all glyphs.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Vectorize`] if any path string is rejected;
    /// the whole request fails and no partial response is built.
    pub fn process(&self, request: &FontLoadRequest) -> Result<FontLoadResponse, ProcessError> {
        let metrics = &request.paths_properties;
        log::debug!(
            "font load request id={} iteration={} glyphs={}",
            request.id,
            request.iteration,
            request.paths_str.len()
        );

        let svg_bounding_box = BoundingBox::new(
            0.0,
            -metrics.font_bounding_box_descent,
            metrics.width,
            metrics.font_bounding_box_descent - metrics.font_bounding_box_ascent,
        );
        let svg_origin = svg_bounding_box.baseline_anchor();

        let mut vertices = Vec::new();
        let mut lines = Vec::new();

        for (glyph, path) in request.paths_str.iter().enumerate() {
            let collection = self
                .vectorizer
                .convert(path)
                .map_err(|source| ProcessError::Vectorize { glyph, source })?;

            for line in &collection.lines {
                let samples: Vec<Point> = line
                    .points
                    .iter()
                    .map(|p| Point::new(p.x * X_SCALE, p.y - svg_origin.y))
                    .collect();
                vertices.extend(density::normalize(&samples, MIN_DIST, MAX_DIST));

                lines.push(line.map_points(|p| Point::new(p.x * X_SCALE, p.y)));
            }
        }

        log::debug!(
            "font load response id={} vertices={} lines={}",
            request.id,
            vertices.len(),
            lines.len()
        );

        Ok(FontLoadResponse {
            id: request.id,
            iteration: request.iteration,
            vertices,
            lines,
            svg_bounding_box,
            svg_origin,
            x_scale: X_SCALE,
        })
    }
}
