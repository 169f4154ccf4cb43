//! Glyph sources
//!
//! A [`GlyphSource`] turns characters into coverage bitmaps at a fixed pixel
//! size. Two sources exist: [`TrueTypeFont`] backed by `fontdue`, and the
//! built-in [`BlockFont`] used when no font file can be loaded.
//! [`FontHandle`] is whichever of the two the fallback chain produced.

pub mod bitmap;
pub mod loader;
pub mod truetype;

pub use bitmap::BlockFont;
pub use loader::{default_candidates, load_with_fallback};
pub use truetype::TrueTypeFont;

use std::path::PathBuf;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Largest pixel size any glyph source accepts
pub const MAX_FONT_SIZE: f32 = 1024.0;

/// Whether `size` is a usable pixel size: finite, positive, at most [`MAX_FONT_SIZE`]
#[must_use]
pub fn is_valid_size(size: f32) -> bool {
    size.is_finite() && size > 0.0 && size <= MAX_FONT_SIZE
}

/// Errors that can occur while loading a font
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The font file could not be read
    #[error("Failed to read font file {path:?}: {source}")]
    Io {
        /// Path that was tried
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The font data could not be parsed
    #[error("Failed to parse font: {0}")]
    Parse(String),

    /// Pixel size was not finite or outside `0 < size <= MAX_FONT_SIZE`
    #[error("Invalid font size: {0}px (expected 0 < size <= {max})", max = MAX_FONT_SIZE)]
    InvalidSize(f32),
}

/// A rasterized glyph: coverage mask plus placement relative to the pen
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBitmap {
    /// Bitmap width in pixels
    pub width: u32,
    /// Bitmap height in pixels
    pub height: u32,
    /// Offset from the pen position to the bitmap's left edge
    pub left: i32,
    /// Offset from the baseline up to the bitmap's top edge
    pub top: i32,
    /// Horizontal pen advance after this glyph
    pub advance: f32,
    /// Row-major coverage, one byte per pixel (0 = empty, 255 = full)
    pub coverage: Vec<u8>,
}

impl GlyphBitmap {
    /// A glyph with no ink that only moves the pen
    #[must_use]
    pub const fn blank(advance: f32) -> Self {
        Self {
            width: 0,
            height: 0,
            left: 0,
            top: 0,
            advance,
            coverage: Vec::new(),
        }
    }

    /// Whether the glyph's bounding box is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage at `(x, y)` inside the bitmap, 0 outside it
    #[must_use]
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Anything that can rasterize characters at a fixed pixel size
pub trait GlyphSource {
    /// Rasterize a single character
    ///
    /// Characters the source cannot draw still return a bitmap (a placeholder
    /// or a blank glyph) so layout never has holes.
    fn rasterize(&self, ch: char) -> GlyphBitmap;

    /// Distance from the top of a line to its baseline, in pixels
    fn ascent(&self) -> f32;

    /// Baseline-to-baseline distance the font itself recommends
    fn line_height(&self) -> f32;

    /// Human readable name for logging
    fn name(&self) -> &str;
}

/// The font the fallback chain settled on
#[derive(Debug, Clone)]
pub enum FontHandle {
    /// A TrueType/OpenType font loaded from disk or memory
    TrueType(TrueTypeFont),
    /// The built-in block-element font
    Builtin(BlockFont),
}

impl FontHandle {
    /// Whether this is the built-in fallback rather than a real font
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }
}

impl GlyphSource for FontHandle {
    fn rasterize(&self, ch: char) -> GlyphBitmap {
        match self {
            Self::TrueType(font) => font.rasterize(ch),
            Self::Builtin(font) => font.rasterize(ch),
        }
    }

    fn ascent(&self) -> f32 {
        match self {
            Self::TrueType(font) => font.ascent(),
            Self::Builtin(font) => font.ascent(),
        }
    }

    fn line_height(&self) -> f32 {
        match self {
            Self::TrueType(font) => font.line_height(),
            Self::Builtin(font) => font.line_height(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::TrueType(font) => font.name(),
            Self::Builtin(font) => font.name(),
        }
    }
}

impl From<TrueTypeFont> for FontHandle {
    fn from(font: TrueTypeFont) -> Self {
        Self::TrueType(font)
    }
}

impl From<BlockFont> for FontHandle {
    fn from(font: BlockFont) -> Self {
        Self::Builtin(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_glyph() {
        let glyph = GlyphBitmap::blank(12.0);
        assert!(glyph.is_empty());
        assert_eq!(glyph.coverage_at(0, 0), 0);
        assert_eq!(glyph.advance, 12.0);
    }

    #[test]
    fn test_coverage_at_bounds() {
        let glyph = GlyphBitmap {
            width: 2,
            height: 2,
            left: 0,
            top: 2,
            advance: 2.0,
            coverage: vec![1, 2, 3, 4],
        };
        assert_eq!(glyph.coverage_at(1, 0), 2);
        assert_eq!(glyph.coverage_at(0, 1), 3);
        assert_eq!(glyph.coverage_at(2, 0), 0);
        assert_eq!(glyph.coverage_at(0, 2), 0);
    }

    #[test]
    fn test_handle_delegates_to_builtin() {
        let handle = FontHandle::from(BlockFont::new(10, 20));
        assert!(handle.is_builtin());
        assert_eq!(handle.ascent(), 20.0);
        assert_eq!(handle.rasterize('█').width, 10);
    }

    #[test]
    fn test_valid_sizes() {
        assert!(is_valid_size(0.5));
        assert!(is_valid_size(MAX_FONT_SIZE));
        for size in [0.0, -1.0, MAX_FONT_SIZE + 1.0, f32::NAN, f32::INFINITY] {
            assert!(!is_valid_size(size), "{size} should be rejected");
        }
    }
}
