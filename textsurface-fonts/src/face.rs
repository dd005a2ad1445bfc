//! Font face wrapper around `ttf-parser`.

use std::sync::Arc;

use crate::error::FontError;

/// A single glyph's measurements in design units, plus the kerning
/// adjustment toward the glyph that follows it in the measured string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphRecord {
    /// Horizontal advance, if the glyph has one.
    pub advance: Option<u16>,
    /// Kerning toward the next glyph in the string. Zero for the last
    /// glyph. Negative values mean tighter spacing.
    pub kern_to_next: i16,
    /// Tight vertical extents `(y_min, y_max)` of the glyph's ink, if any.
    pub extents: Option<(i16, i16)>,
}

/// Parsed font data.
///
/// Stores owned font bytes and cached global metrics; a `ttf_parser::Face`
/// is created on demand for individual queries (parsing is allocation-free
/// header validation).
#[derive(Clone)]
pub struct FontFace {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Global ascender in design units (positive).
    ascender: i16,
    /// Global descender in design units (negative).
    descender: i16,
}

impl FontFace {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::ParseError`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::ParseError(e.to_string()))?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            bytes,
        })
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        let face = ttf_parser::Face::parse(&self.bytes, 0)
            .expect("font bytes validated at construction");
        face
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Global ascender in design units.
    #[must_use]
    pub const fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Global descender in design units (negative).
    #[must_use]
    pub const fn descender(&self) -> i16 {
        self.descender
    }

    /// Scale factor from design units to the given font size.
    #[must_use]
    pub fn scale(&self, font_size: f64) -> f64 {
        font_size / f64::from(self.units_per_em)
    }

    /// Kerning adjustment between two glyphs, in design units.
    fn kern(&self, left: u16, right: u16) -> i16 {
        self.face()
            .tables()
            .kern
            .and_then(|kern| {
                kern.subtables.into_iter().find_map(|st| {
                    st.glyphs_kerning(ttf_parser::GlyphId(left), ttf_parser::GlyphId(right))
                })
            })
            .unwrap_or(0)
    }

    /// Collect per-glyph measurement records for a string, in design units.
    ///
    /// Characters with no glyph in the cmap are skipped, matching canvas
    /// measurement behavior for unmapped codepoints.
    #[must_use]
    pub fn glyph_records(&self, text: &str) -> Vec<GlyphRecord> {
        let face = self.face();
        let gids: Vec<u16> = text
            .chars()
            .filter_map(|ch| face.glyph_index(ch).map(|g| g.0))
            .collect();

        gids.iter()
            .enumerate()
            .map(|(i, &gid)| {
                let kern_to_next = gids
                    .get(i + 1)
                    .map_or(0, |&next| self.kern(gid, next));
                GlyphRecord {
                    advance: face.glyph_hor_advance(ttf_parser::GlyphId(gid)),
                    kern_to_next,
                    extents: face
                        .glyph_bounding_box(ttf_parser::GlyphId(gid))
                        .map(|bb| (bb.y_min, bb.y_max)),
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .field("descender", &self.descender)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}
