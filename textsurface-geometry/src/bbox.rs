//! Axis-aligned bounding boxes.
//!
//! Unlike a min/max corner pair, [`BoundingBox`] stores an anchor point plus
//! extents, matching the wire shape consumed by callers (`{x, y, width,
//! height}`). `height` may legitimately be negative: the glyph bounding box
//! is derived from signed font metrics (descender below the baseline is
//! negative) and callers rely on the raw arithmetic.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::types::Scalar;

/// Axis-aligned bounding box in anchor + extents form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    pub x: Scalar,
    pub y: Scalar,
    pub width: Scalar,
    pub height: Scalar,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The anchor corner `(x, y)`.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The corner opposite the anchor along the y axis: `(x, y + height)`.
    ///
    /// For a glyph bounding box this is the baseline-relative anchor used
    /// to translate outline y-coordinates into render space.
    #[must_use]
    pub const fn baseline_anchor(&self) -> Point {
        Point::new(self.x, self.y + self.height)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn baseline_anchor_adds_height() {
        let bb = BoundingBox::new(0.0, 2.0, 100.0, -10.0);
        assert_eq!(bb.baseline_anchor(), Point::new(0.0, -8.0));
        assert_eq!(bb.origin(), Point::new(0.0, 2.0));
    }

    #[test]
    fn ignores_unknown_fields() {
        // DOMRect values arriving from a browser carry top/right/bottom/left.
        let bb: BoundingBox = serde_json::from_str(
            r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0,"top":2.0,"left":1.0}"#,
        )
        .expect("deserialize DOMRect-shaped value");
        assert_eq!(bb, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    }
}
