//! Text measurement.
//!
//! Produces [`MetricsResult`], the canvas-`TextMetrics`-shaped record the
//! glyph layout orchestrator consumes. Sign conventions follow the font,
//! not the canvas: the descender is negative, so `fontBoundingBoxDescent`
//! is negative too. Downstream bounding-box arithmetic depends on these
//! signs as-is.

use serde::{Deserialize, Serialize};

use crate::face::{FontFace, GlyphRecord};

/// Global horizontal stretch applied to every x-coordinate derived from
/// outline space. Advances are measured pre-stretched so that measured
/// width and stretched outlines agree; kerning adjustments are not
/// stretched.
pub const X_SCALE: f64 = 1.035;

/// Aggregate measurements for a shaped string at a specific font size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsResult {
    /// Total advance width (character advances plus kerning).
    pub width: f64,
    /// Highest ink extent above the baseline across the string (positive).
    pub actual_bounding_box_ascent: f64,
    /// Lowest ink extent below the baseline across the string (negative).
    pub actual_bounding_box_descent: f64,
    /// Font-level ascender (positive).
    pub font_bounding_box_ascent: f64,
    /// Font-level descender (negative).
    pub font_bounding_box_descent: f64,
}

/// Measure a text string against a font face.
///
/// `x_scale` stretches glyph advances horizontally (pass [`X_SCALE`] to
/// match outline processing, or `1.0` for unstretched measurement).
#[must_use]
pub fn measure_text(text: &str, face: &FontFace, font_size: f64, x_scale: f64) -> MetricsResult {
    fold_metrics(
        &face.glyph_records(text),
        face.scale(font_size),
        x_scale,
        face.ascender(),
        face.descender(),
    )
}

/// Accumulate glyph records into a metrics result.
///
/// Separated from [`FontFace`] so the arithmetic is testable with synthetic
/// records, without font binaries.
fn fold_metrics(
    records: &[GlyphRecord],
    scale: f64,
    x_scale: f64,
    ascender: i16,
    descender: i16,
) -> MetricsResult {
    let mut width = 0.0;
    let mut max_ascent: i16 = 0;
    let mut min_descent: i16 = 0;

    for (i, record) in records.iter().enumerate() {
        if let Some(advance) = record.advance {
            width += f64::from(advance) * scale * x_scale;
        }
        // Kerning is applied between pairs, so the last record's value is
        // ignored; it is also never x-stretched.
        if i + 1 < records.len() {
            width += f64::from(record.kern_to_next) * scale;
        }
        if let Some((y_min, y_max)) = record.extents {
            max_ascent = max_ascent.max(y_max);
            min_descent = min_descent.min(y_min);
        }
    }

    MetricsResult {
        width,
        actual_bounding_box_ascent: f64::from(max_ascent) * scale,
        actual_bounding_box_descent: f64::from(min_descent) * scale,
        font_bounding_box_ascent: f64::from(ascender) * scale,
        font_bounding_box_descent: f64::from(descender) * scale,
    }
}
