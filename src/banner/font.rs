//! Embedded font face for banner labels.
//!
//! Wraps a parsed font at a fixed pixel size and exposes the two
//! capabilities the annotation core needs: measuring rendered text width
//! and outlining glyphs for drawing. The face is constructed once by the
//! orchestrating layer and shared across a whole batch, so the parse cost
//! is paid a single time.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};

use super::BannerError;

/// Label font size in pixels.
pub const LABEL_SIZE_PX: f32 = 36.0;

/// Embedded font data (DejaVu Sans Bold - public-domain-equivalent license).
const EMBEDDED_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");

/// A font face at a fixed pixel size, ready for measuring and drawing.
#[derive(Clone)]
pub struct LabelFont {
    font: FontRef<'static>,
    scale: PxScale,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("scale", &self.scale)
            .finish()
    }
}

impl LabelFont {
    /// Parse the embedded font at the given pixel size.
    pub fn embedded(size_px: f32) -> Result<Self, BannerError> {
        Self::from_slice(EMBEDDED_FONT_DATA, size_px)
    }

    /// Parse font data from a byte slice at the given pixel size.
    pub fn from_slice(data: &'static [u8], size_px: f32) -> Result<Self, BannerError> {
        let font =
            FontRef::try_from_slice(data).map_err(|e| BannerError::font_load(e.to_string()))?;

        Ok(Self {
            font,
            scale: PxScale::from(size_px),
        })
    }

    /// Measure the rendered pixel width of `text`.
    ///
    /// Sums per-glyph horizontal advances plus the font's own kerning.
    /// Characters without a glyph in the font contribute the fallback
    /// glyph's advance.
    pub fn measure(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);

        let mut width = 0.0f32;
        let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

        for c in text.chars() {
            let glyph_id = scaled.glyph_id(c);

            if let Some(prev) = prev_glyph {
                width += scaled.kern(prev, glyph_id);
            }

            width += scaled.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }

        width.round() as u32
    }

    pub(crate) fn font(&self) -> &FontRef<'static> {
        &self.font
    }

    pub(crate) fn scale(&self) -> PxScale {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_font_parses() {
        let font = LabelFont::embedded(LABEL_SIZE_PX).unwrap();
        assert!(font.measure("CUI") > 0);
    }

    #[test]
    fn test_invalid_font_data_is_font_load_error() {
        let result = LabelFont::from_slice(b"not a font", LABEL_SIZE_PX);
        assert!(matches!(result, Err(BannerError::FontLoad { .. })));
    }

    #[test]
    fn test_measure_empty_text_is_zero() {
        let font = LabelFont::embedded(LABEL_SIZE_PX).unwrap();
        assert_eq!(font.measure(""), 0);
    }

    #[test]
    fn test_measure_grows_with_text_length() {
        let font = LabelFont::embedded(LABEL_SIZE_PX).unwrap();
        let short = font.measure("SECRET");
        let long = font.measure("UNCLASSIFIED");
        assert!(long > short);
    }

    #[test]
    fn test_font_size_affects_width() {
        let small = LabelFont::embedded(12.0).unwrap();
        let large = LabelFont::embedded(48.0).unwrap();
        assert!(large.measure("CUI") > small.measure("CUI"));
    }

    #[test]
    fn test_unsupported_characters_still_measure() {
        let font = LabelFont::embedded(LABEL_SIZE_PX).unwrap();
        // Characters outside the font's coverage map to the fallback glyph,
        // which contributes its own advance without failing.
        let base = font.measure("AB");
        let mixed = font.measure("A\u{e000}B");
        assert!(mixed >= base);
    }
}
