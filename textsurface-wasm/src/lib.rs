//! WASM worker boundary for `TextSurface`.
//!
//! Exposes the glyph layout orchestrator as a synchronous call/return
//! surface: the host (typically a web worker's message handler) passes the
//! request value in and receives the response value back, correlated by the
//! echoed `id`/`iteration` fields. A message whose `type` tag is
//! unrecognized fails deserialization here and produces an error instead of
//! a response.

use std::sync::Arc;

use textsurface_core::{GlyphProcessor, Request, Response};
use textsurface_fonts::{FontFace, X_SCALE};
use textsurface_outline::SvgPathVectorizer;
use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger. Call once at worker startup.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (e.g. a worker restarted in the same realm) is fine.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("textsurface worker initialized");
}

/// Process one request value, returning the response value.
///
/// # Errors
///
/// Fails on an unrecognized or malformed message, or when the outline
/// vectorizer rejects a path string. No partial response is produced.
#[wasm_bindgen]
pub fn process_request(request: JsValue) -> Result<JsValue, JsError> {
    let request: Request = serde_wasm_bindgen::from_value(request)?;
    let processor = GlyphProcessor::new(SvgPathVectorizer);
    let response: Response = processor.handle(&request)?;
    Ok(serde_wasm_bindgen::to_value(&response)?)
}

/// Measure a text string against raw font bytes, returning the metrics
/// record a font-load request carries in `paths_properties`.
///
/// Advances are stretched by the global x-scale so that measured width and
/// stretched outlines agree.
///
/// # Errors
///
/// Fails if the bytes are not a valid OpenType/TrueType font.
#[wasm_bindgen]
pub fn measure_text(text: &str, font_bytes: &[u8], font_size: f64) -> Result<JsValue, JsError> {
    let face = FontFace::from_bytes(Arc::from(font_bytes))?;
    let metrics = textsurface_fonts::measure_text(text, &face, font_size, X_SCALE);
    Ok(serde_wasm_bindgen::to_value(&metrics)?)
}
