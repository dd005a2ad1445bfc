//! Request/response message types and their wire encoding.
//!
//! Messages are internally tagged with a `type` field so that the transport
//! (a web worker boundary, a task queue) can route them without inspecting
//! payloads. An inbound value with an unrecognized tag fails
//! deserialization — the request is dropped at the boundary and no response
//! is emitted for it.
//!
//! Correlation contract: `id` and `iteration` are echoed from request to
//! response unchanged. Callers match asynchronous responses to requests by
//! `id` and discard responses whose `iteration` has been superseded.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use textsurface_fonts::MetricsResult;
use textsurface_geometry::{BoundingBox, Polyline};

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Inbound message envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    FontLoadRequest(FontLoadRequest),
}

/// Outbound message envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    FontLoadResponse(FontLoadResponse),
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// One font-load request: a shaped string plus one outline path string per
/// glyph and the string's precomputed measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontLoadRequest {
    /// Correlation id, echoed in the response.
    pub id: u64,
    /// Caller-supplied sequence number for staleness detection, echoed in
    /// the response.
    pub iteration: u64,
    /// The shaped text. Carried for the caller's benefit; glyph processing
    /// is driven by `paths_str`.
    pub text: String,
    /// Measurements of `text`, produced by the text-metrics collaborator.
    pub paths_properties: MetricsResult,
    /// One outline path string per glyph of `text`, in glyph order. The 1:1
    /// correspondence with `text` is the caller's contract, not enforced
    /// here.
    pub paths_str: Vec<String>,
    /// Target rectangle the caller intends to render into. Carried on the
    /// wire for transport fidelity; glyph processing does not consume it.
    pub bounding_box: BoundingBox,
}

/// The aggregate result of one font-load request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontLoadResponse {
    /// Correlation id from the request.
    pub id: u64,
    /// Iteration counter from the request.
    pub iteration: u64,
    /// Density-normalized sample points across all glyphs, flattened in
    /// glyph order then contour order, in render space (x stretched, y
    /// baseline-translated).
    pub vertices: Vec<Point>,
    /// The original contours, x-stretched only, with open/closed flags
    /// preserved. Independent of `vertices` — a separate transform of the
    /// same source contours.
    pub lines: Vec<Polyline>,
    /// Whole-font vertical extent box for the measured string.
    #[serde(rename = "svgBoundingBox")]
    pub svg_bounding_box: BoundingBox,
    /// Baseline-relative anchor derived from the bounding box.
    #[serde(rename = "svgOrigin")]
    pub svg_origin: Point,
    /// The horizontal stretch constant that was applied to x-coordinates.
    pub x_scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_envelope_roundtrip() {
        let json = serde_json::json!({
            "type": "font_load_request",
            "id": 7,
            "iteration": 3,
            "text": "hi",
            "paths_properties": {
                "width": 20.0,
                "actualBoundingBoxAscent": 7.0,
                "actualBoundingBoxDescent": -2.0,
                "fontBoundingBoxAscent": 8.0,
                "fontBoundingBoxDescent": -2.0,
            },
            "paths_str": ["M 0 0 L 5 0", ""],
            "bounding_box": { "x": 0.0, "y": 0.0, "width": 640.0, "height": 480.0 },
        });
        let request: Request = serde_json::from_value(json).expect("deserialize request");
        let Request::FontLoadRequest(req) = request;
        assert_eq!(req.id, 7);
        assert_eq!(req.iteration, 3);
        assert_eq!(req.paths_str.len(), 2);
        assert_eq!(req.paths_properties.width, 20.0);
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        let json = serde_json::json!({ "type": "minigame_request", "id": 1 });
        let result: Result<Request, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn response_envelope_is_tagged_and_camel_cased() {
        let response = Response::FontLoadResponse(FontLoadResponse {
            id: 1,
            iteration: 2,
            vertices: vec![Point::new(1.0, 2.0)],
            lines: vec![Polyline::open(vec![Point::new(1.0, 2.0)])],
            svg_bounding_box: BoundingBox::new(0.0, 2.0, 10.0, -10.0),
            svg_origin: Point::new(0.0, -8.0),
            x_scale: 1.035,
        });
        let json = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(json["type"], "font_load_response");
        assert_eq!(json["svgBoundingBox"]["height"], -10.0);
        assert_eq!(json["svgOrigin"]["y"], -8.0);
        assert_eq!(json["x_scale"], 1.035);
        assert_eq!(json["vertices"][0]["x"], 1.0);
        assert_eq!(json["lines"][0]["is_closed"], false);
    }
}
