//! TrueType/OpenType glyph source
//!
//! Rasterizes glyphs on demand with `fontdue` at one fixed pixel size.

use std::fmt;
use std::path::Path;

use fontdue::{Font, FontSettings};

use super::{is_valid_size, FontError, FontResult, GlyphBitmap, GlyphSource};

/// A parsed font at a fixed pixel size
#[derive(Clone)]
pub struct TrueTypeFont {
    font: Font,
    size: f32,
    name: String,
    ascent: f32,
    line_height: f32,
}

impl TrueTypeFont {
    /// Parse a font from raw TTF/OTF bytes
    ///
    /// # Arguments
    ///
    /// * `font_data` - Raw font file bytes
    /// * `size` - Pixel size glyphs are rasterized at
    pub fn from_bytes(font_data: &[u8], size: f32) -> FontResult<Self> {
        if !is_valid_size(size) {
            return Err(FontError::InvalidSize(size));
        }

        let settings = FontSettings {
            scale: size,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|e| FontError::Parse(format!("fontdue error: {e}")))?;

        // Fonts without a hhea table still need a baseline; use the em box
        let (ascent, line_height) = font
            .horizontal_line_metrics(size)
            .map_or((size, size), |m| (m.ascent, m.new_line_size));

        let name = font.name().unwrap_or("unnamed font").to_string();
        log::info!("Loaded font '{}' at {}px size", name, size);

        Ok(Self {
            font,
            size,
            name,
            ascent,
            line_height,
        })
    }

    /// Read and parse a font file
    pub fn from_file<P: AsRef<Path>>(path: P, size: f32) -> FontResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, size)
    }

    /// Pixel size glyphs are rasterized at
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Whether the font maps `ch` to a real glyph rather than `.notdef`
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }
}

impl GlyphSource for TrueTypeFont {
    fn rasterize(&self, ch: char) -> GlyphBitmap {
        let (metrics, coverage) = self.font.rasterize(ch, self.size);

        // fontdue measures ymin from the baseline to the bitmap's bottom edge
        GlyphBitmap {
            width: metrics.width as u32,
            height: metrics.height as u32,
            left: metrics.xmin,
            top: metrics.ymin + metrics.height as i32,
            advance: metrics.advance_width,
            coverage,
        }
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for TrueTypeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFont")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("ascent", &self.ascent)
            .field("line_height", &self.line_height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_size() {
        for size in [0.0, -4.0, 90_000.0, f32::NAN, f32::INFINITY] {
            let result = TrueTypeFont::from_bytes(&[], size);
            assert!(matches!(result, Err(FontError::InvalidSize(_))));
        }
    }

    #[test]
    fn test_rejects_garbage_bytes() {
        let result = TrueTypeFont::from_bytes(b"definitely not a font", 20.0);
        assert!(matches!(result, Err(FontError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("text_raster_no_such_font.ttf");
        match TrueTypeFont::from_file(&path, 20.0) {
            Err(FontError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_installed_full_block_straddles_baseline() {
        let Some(font) = crate::font::default_candidates()
            .iter()
            .find_map(|path| TrueTypeFont::from_file(path, 20.0).ok())
        else {
            return;
        };
        if !font.has_glyph('█') {
            return;
        }
        assert_eq!(font.size(), 20.0);

        let glyph = font.rasterize('█');
        let (metrics, _) = font.font.rasterize('█', font.size());
        assert!(!glyph.is_empty());
        assert_eq!(glyph.coverage.len(), (glyph.width * glyph.height) as usize);
        assert_eq!(glyph.left, metrics.xmin);
        // Top edge above the baseline, bottom edge at or below it
        assert!(glyph.top > 0);
        assert!(glyph.top - glyph.height as i32 <= 0);
        assert!(glyph.top as f32 <= font.ascent().ceil() + 1.0);
    }
}
