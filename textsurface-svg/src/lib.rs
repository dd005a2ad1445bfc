//! SVG preview renderer for `TextSurface` responses.
//!
//! Converts a [`FontLoadResponse`] into an SVG [`Document`] for visual
//! inspection: retained contours as `<path>` outlines and the sampled
//! vertices as `<circle>` dots. This is a debugging surface — the
//! production consumer of a response is a particle renderer, not SVG.
//!
//! Path data is built as raw `d` strings to preserve `f64` precision
//! (the `svg` crate's `Data` builder uses `f32`).

use svg::node::element::{Circle, Group, Path as SvgPath};
use svg::Document;

use textsurface_core::FontLoadResponse;
use textsurface_geometry::{Polyline, Scalar};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a response to an SVG [`Document`] with default options.
#[must_use]
pub fn render(response: &FontLoadResponse) -> Document {
    render_with_options(response, &RenderOptions::default())
}

/// Render a response to an SVG string.
#[must_use]
pub fn render_to_string(response: &FontLoadResponse) -> String {
    render(response).to_string()
}

/// Options controlling preview output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Extra margin around the view box. Default: 4.0.
    pub margin: Scalar,
    /// Number of decimal places for coordinates. Default: 3.
    pub precision: usize,
    /// Radius of the sampled-vertex dots. Default: 1.0.
    pub vertex_radius: Scalar,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 4.0,
            precision: 3,
            vertex_radius: 1.0,
        }
    }
}

/// Render a response to an SVG [`Document`] with custom options.
#[must_use]
pub fn render_with_options(response: &FontLoadResponse, opts: &RenderOptions) -> Document {
    let mut contours = Group::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 0.5);
    for line in &response.lines {
        contours = contours.add(render_line(line, opts.precision));
    }

    let mut dots = Group::new().set("fill", "crimson");
    for vertex in &response.vertices {
        dots = dots.add(
            Circle::new()
                .set("cx", fmt_coord(vertex.x, opts.precision))
                .set("cy", fmt_coord(vertex.y, opts.precision))
                .set("r", opts.vertex_radius),
        );
    }

    let (x, y, width, height) = view_box(response, opts.margin);
    Document::new()
        .set("viewBox", format!("{x} {y} {width} {height}"))
        .add(contours)
        .add(dots)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn render_line(line: &Polyline, precision: usize) -> SvgPath {
    SvgPath::new().set("d", polyline_to_d(line, precision))
}

/// Build a `d` attribute from a polyline.
fn polyline_to_d(line: &Polyline, precision: usize) -> String {
    let mut d = String::new();
    for (i, p) in line.points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!(
            "{cmd}{} {} ",
            fmt_coord(p.x, precision),
            fmt_coord(p.y, precision)
        ));
    }
    if line.is_closed {
        d.push('Z');
    }
    d.trim_end().to_owned()
}

fn fmt_coord(v: Scalar, precision: usize) -> String {
    let s = format!("{v:.precision$}");
    if !s.contains('.') {
        return s;
    }
    // Trim trailing fractional zeros but keep at least one digit.
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// View box covering the response's bounding box, with signed extents
/// normalized (the glyph box height is negative when derived from font
/// metrics) and every vertex included.
fn view_box(response: &FontLoadResponse, margin: Scalar) -> (Scalar, Scalar, Scalar, Scalar) {
    let bb = &response.svg_bounding_box;
    let mut min_x = bb.x.min(bb.x + bb.width);
    let mut max_x = bb.x.max(bb.x + bb.width);
    let mut min_y = bb.y.min(bb.y + bb.height);
    let mut max_y = bb.y.max(bb.y + bb.height);

    for p in &response.vertices {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    (
        min_x - margin,
        min_y - margin,
        (max_x - min_x) + 2.0 * margin,
        (max_y - min_y) + 2.0 * margin,
    )
}
