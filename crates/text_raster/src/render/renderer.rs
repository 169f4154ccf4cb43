//! Text-to-image renderer
//!
//! Converts a block of text into a transparent RGBA image:
//!
//! 1. Split the text into lines, dropping blank lines at both ends
//! 2. Measure one representative glyph ([`REPRESENTATIVE_GLYPH`]) as the cell
//! 3. Size the canvas as `columns * cell + 2 * padding` on each axis
//! 4. Draw every line at `x = padding`, stepping down one cell per line
//!
//! # Example
//!
//! ```
//! use text_raster::{render, BlockFont, FillColor};
//!
//! let font = BlockFont::new(10, 20);
//! let image = render("AB\nCD", &font, FillColor::LOGO_CYAN)?;
//! assert_eq!(image.dimensions(), (60, 80));
//! # Ok::<(), text_raster::RenderError>(())
//! ```

use std::collections::HashMap;

use image::RgbaImage;

use super::{Canvas, GlyphMetrics, LineSequence, RenderResult, TextLayout};
use crate::color::FillColor;
use crate::config::RenderConfig;
use crate::font::{GlyphBitmap, GlyphSource};

/// Padding on each side of the text block, in pixels
pub const DEFAULT_PADDING: u32 = 20;

/// Glyph whose bounding box defines the cell size (U+2588 FULL BLOCK)
pub const REPRESENTATIVE_GLYPH: char = '\u{2588}';

/// Configurable text renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    padding: u32,
    line_gap: u32,
    background: FillColor,
    representative: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            line_gap: 0,
            background: FillColor::TRANSPARENT,
            representative: REPRESENTATIVE_GLYPH,
        }
    }
}

impl TextRenderer {
    /// Renderer with 20px padding, tight line packing and a transparent background
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer matching a loaded configuration
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new()
            .with_padding(config.padding)
            .with_line_gap(config.line_gap)
            .with_background(config.background)
    }

    /// Set the padding around the text block
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set extra space between lines (0 packs lines tightly)
    #[must_use]
    pub const fn with_line_gap(mut self, line_gap: u32) -> Self {
        self.line_gap = line_gap;
        self
    }

    /// Set the canvas background
    #[must_use]
    pub const fn with_background(mut self, background: FillColor) -> Self {
        self.background = background;
        self
    }

    /// Measure with a different representative glyph
    #[must_use]
    pub const fn with_representative(mut self, ch: char) -> Self {
        self.representative = ch;
        self
    }

    /// Split and measure `text` without drawing it
    pub fn layout<F: GlyphSource + ?Sized>(
        &self,
        text: &str,
        font: &F,
    ) -> RenderResult<(LineSequence, TextLayout)> {
        let lines = LineSequence::parse(text)?;
        let cell = GlyphMetrics::measure(font, self.representative)?;
        let layout = TextLayout::compute(&lines, cell, self.padding, self.line_gap)?;
        Ok((lines, layout))
    }

    /// Render `text` in `color` using `font`
    pub fn render<F: GlyphSource + ?Sized>(
        &self,
        text: &str,
        font: &F,
        color: FillColor,
    ) -> RenderResult<RgbaImage> {
        let (lines, layout) = self.layout(text, font)?;
        log::info!(
            "Rendering {} line(s) onto {}x{} canvas with {} (cell {}x{})",
            lines.len(),
            layout.width,
            layout.height,
            font.name(),
            layout.cell.width,
            layout.cell.height
        );

        let mut canvas = Canvas::new(layout.width, layout.height, self.background);
        let mut glyph_cache: HashMap<char, GlyphBitmap> = HashMap::new();
        let ascent = font.ascent().round() as i64;

        for (line, &(x, y)) in lines.lines().iter().zip(&layout.line_origins) {
            let baseline = i64::from(y) + ascent;
            let mut pen_x = x as f32;

            for ch in line.chars() {
                let glyph = glyph_cache.entry(ch).or_insert_with(|| font.rasterize(ch));
                let left = pen_x.round() as i64 + i64::from(glyph.left);
                let top = baseline - i64::from(glyph.top);
                canvas.draw_glyph(left, top, glyph, color);
                pen_x += glyph.advance;
            }
        }

        Ok(canvas.into_image())
    }
}

/// Render `text` with the default renderer settings
pub fn render<F: GlyphSource + ?Sized>(
    text: &str,
    font: &F,
    color: FillColor,
) -> RenderResult<RgbaImage> {
    TextRenderer::default().render(text, font, color)
}
