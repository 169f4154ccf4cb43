//! Line splitting, glyph measurement and canvas sizing
//!
//! Layout treats the font as monospace: one representative glyph's bounding
//! box stands in for the advance and line height of every character. This is
//! an approximation. Real per-glyph measurement would lay out differently for
//! fonts that are not truly fixed-width.

use crate::font::GlyphSource;

use super::{RenderError, RenderResult};

/// Ordered, non-empty lines of text with surrounding blank lines removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split `text` on line breaks, dropping blank lines at both ends
    ///
    /// Blank lines in the middle and indentation inside the block are kept.
    /// Fails with [`RenderError::EmptyInput`] if no line has any content.
    pub fn parse(text: &str) -> RenderResult<Self> {
        let all: Vec<&str> = text.lines().collect();
        let is_content = |line: &&str| !line.trim().is_empty();

        let first = all.iter().position(is_content).ok_or(RenderError::EmptyInput)?;
        let last = all.iter().rposition(is_content).ok_or(RenderError::EmptyInput)?;

        Ok(Self {
            lines: all[first..=last].iter().map(|line| (*line).to_string()).collect(),
        })
    }

    /// The lines, top to bottom
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; a sequence is never constructed empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Length of the longest line in characters
    #[must_use]
    pub fn max_columns(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Pixel size of one character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Cell width in pixels
    pub width: u32,
    /// Cell height in pixels
    pub height: u32,
}

impl GlyphMetrics {
    /// Measure `ch`'s bounding box under `font`
    ///
    /// A dimension with an empty bounding box falls back to the font's own
    /// advance (width) or line height (height).
    pub fn measure<F: GlyphSource + ?Sized>(font: &F, ch: char) -> RenderResult<Self> {
        let glyph = font.rasterize(ch);

        let mut width = glyph.width;
        let mut height = glyph.height;
        if glyph.is_empty() {
            log::warn!(
                "Glyph '{}' has an empty bounding box in {}, using font advance and line height",
                ch,
                font.name()
            );
            if width == 0 {
                width = glyph.advance.max(0.0).ceil() as u32;
            }
            if height == 0 {
                height = font.line_height().max(0.0).ceil() as u32;
            }
        }

        if width == 0 || height == 0 {
            return Err(RenderError::DegenerateGlyph(ch));
        }

        log::debug!("Measured '{}' as {}x{} in {}", ch, width, height, font.name());
        Ok(Self { width, height })
    }
}

/// Canvas size and the origin of every line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    /// Cell metrics used for the whole block
    pub cell: GlyphMetrics,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Top-left pixel of each line's first cell, top to bottom
    pub line_origins: Vec<(u32, u32)>,
}

impl TextLayout {
    /// Size the canvas for `lines` and place each line
    ///
    /// `padding` surrounds the block on every side. Lines are stacked
    /// `cell.height + line_gap` apart; a gap of 0 packs them tightly.
    pub fn compute(
        lines: &LineSequence,
        cell: GlyphMetrics,
        padding: u32,
        line_gap: u32,
    ) -> RenderResult<Self> {
        let columns = lines.max_columns();
        let rows = lines.len();
        let too_large = || RenderError::CanvasTooLarge { columns, rows };

        let cols = u32::try_from(columns).map_err(|_| too_large())?;
        let row_count = u32::try_from(rows).map_err(|_| too_large())?;
        let margins = padding.checked_mul(2).ok_or_else(too_large)?;
        let pitch = cell.height.checked_add(line_gap).ok_or_else(too_large)?;

        let width = cols
            .checked_mul(cell.width)
            .and_then(|w| w.checked_add(margins))
            .ok_or_else(too_large)?;
        let height = row_count
            .checked_mul(cell.height)
            .and_then(|h| h.checked_add(row_count.saturating_sub(1).checked_mul(line_gap)?))
            .and_then(|h| h.checked_add(margins))
            .ok_or_else(too_large)?;

        let line_origins = (0..row_count)
            .map(|row| (padding, padding + row * pitch))
            .collect();

        Ok(Self {
            cell,
            width,
            height,
            line_origins,
        })
    }
}
