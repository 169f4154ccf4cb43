//! Built-in block-element font
//!
//! Used when no font file can be loaded. Every glyph occupies one fixed cell.
//! The Unicode Block Elements range (U+2580..=U+259F) is drawn exactly, since
//! that is what text-art logos are made of; whitespace draws nothing and any
//! other character draws a hollow placeholder box.

use super::{GlyphBitmap, GlyphSource, MAX_FONT_SIZE};

/// Pixel size used when the requested size is unusable
const FALLBACK_SIZE: f32 = 20.0;

/// Rectangle in eighths of a cell, `[x0, x1) x [y0, y1)`, origin top-left
#[derive(Debug, Clone, Copy)]
struct Eighths {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

const fn eighths(x0: u32, y0: u32, x1: u32, y1: u32) -> Eighths {
    Eighths { x0, y0, x1, y1 }
}

const UPPER_LEFT: u8 = 0b0001;
const UPPER_RIGHT: u8 = 0b0010;
const LOWER_LEFT: u8 = 0b0100;
const LOWER_RIGHT: u8 = 0b1000;

fn quadrants(mask: u8) -> Vec<Eighths> {
    [
        (UPPER_LEFT, eighths(0, 0, 4, 4)),
        (UPPER_RIGHT, eighths(4, 0, 8, 4)),
        (LOWER_LEFT, eighths(0, 4, 4, 8)),
        (LOWER_RIGHT, eighths(4, 4, 8, 8)),
    ]
    .into_iter()
    .filter(|(bit, _)| mask & bit != 0)
    .map(|(_, rect)| rect)
    .collect()
}

/// Filled regions and their coverage for a block element, if `ch` is one
fn block_shape(ch: char) -> Option<(Vec<Eighths>, u8)> {
    let solid = |rects: Vec<Eighths>| Some((rects, 255));
    let full = eighths(0, 0, 8, 8);

    match ch {
        '\u{2580}' => solid(vec![eighths(0, 0, 8, 4)]),
        // Lower one eighth through full block
        '\u{2581}'..='\u{2588}' => {
            let filled = ch as u32 - 0x2580;
            solid(vec![eighths(0, 8 - filled, 8, 8)])
        }
        // Left seven eighths down to left one eighth
        '\u{2589}'..='\u{258F}' => {
            let filled = 0x2590 - ch as u32;
            solid(vec![eighths(0, 0, filled, 8)])
        }
        '\u{2590}' => solid(vec![eighths(4, 0, 8, 8)]),
        '\u{2591}' => Some((vec![full], 64)),
        '\u{2592}' => Some((vec![full], 128)),
        '\u{2593}' => Some((vec![full], 192)),
        '\u{2594}' => solid(vec![eighths(0, 0, 8, 1)]),
        '\u{2595}' => solid(vec![eighths(7, 0, 8, 8)]),
        '\u{2596}' => solid(quadrants(LOWER_LEFT)),
        '\u{2597}' => solid(quadrants(LOWER_RIGHT)),
        '\u{2598}' => solid(quadrants(UPPER_LEFT)),
        '\u{2599}' => solid(quadrants(UPPER_LEFT | LOWER_LEFT | LOWER_RIGHT)),
        '\u{259A}' => solid(quadrants(UPPER_LEFT | LOWER_RIGHT)),
        '\u{259B}' => solid(quadrants(UPPER_LEFT | UPPER_RIGHT | LOWER_LEFT)),
        '\u{259C}' => solid(quadrants(UPPER_LEFT | UPPER_RIGHT | LOWER_RIGHT)),
        '\u{259D}' => solid(quadrants(UPPER_RIGHT)),
        '\u{259E}' => solid(quadrants(UPPER_RIGHT | LOWER_LEFT)),
        '\u{259F}' => solid(quadrants(UPPER_RIGHT | LOWER_LEFT | LOWER_RIGHT)),
        _ => None,
    }
}

/// Fixed-cell fallback font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFont {
    cell_width: u32,
    cell_height: u32,
}

impl BlockFont {
    /// Create a font with an explicit cell size
    ///
    /// Each side is clamped to `1..=MAX_FONT_SIZE` pixels.
    #[must_use]
    pub fn new(cell_width: u32, cell_height: u32) -> Self {
        let max_side = MAX_FONT_SIZE as u32;
        Self {
            cell_width: cell_width.clamp(1, max_side),
            cell_height: cell_height.clamp(1, max_side),
        }
    }

    /// Create a font whose cells roughly match a monospace face at `size` px
    ///
    /// Monospace faces are typically three fifths as wide as they are tall.
    #[must_use]
    pub fn for_size(size: f32) -> Self {
        let size = if size.is_finite() && size > 0.0 {
            size.min(MAX_FONT_SIZE)
        } else {
            FALLBACK_SIZE
        };
        Self::new((size * 3.0 / 5.0).ceil() as u32, size.ceil() as u32)
    }

    /// Cell size in pixels as `(width, height)`
    #[must_use]
    pub const fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Convert an edge in eighths to pixels, rounding to nearest
    const fn edge(eighths: u32, total: u32) -> usize {
        (eighths as usize * total as usize + 4) / 8
    }

    /// Zeroed coverage buffer for one cell, with its row stride
    fn empty_cell(&self) -> (Vec<u8>, usize) {
        let stride = self.cell_width as usize;
        (vec![0u8; stride * self.cell_height as usize], stride)
    }

    fn cell_bitmap(&self, coverage: Vec<u8>) -> GlyphBitmap {
        GlyphBitmap {
            width: self.cell_width,
            height: self.cell_height,
            left: 0,
            top: self.cell_height as i32,
            advance: self.cell_width as f32,
            coverage,
        }
    }

    fn fill_rects(&self, rects: &[Eighths], value: u8) -> GlyphBitmap {
        let (w, h) = (self.cell_width, self.cell_height);
        let (mut coverage, stride) = self.empty_cell();

        for rect in rects {
            let (x0, x1) = (Self::edge(rect.x0, w), Self::edge(rect.x1, w));
            let (y0, y1) = (Self::edge(rect.y0, h), Self::edge(rect.y1, h));
            for row in coverage.chunks_exact_mut(stride).take(y1).skip(y0) {
                row[x0..x1].fill(value);
            }
        }

        self.cell_bitmap(coverage)
    }

    /// Hollow 1px box inset by one pixel; tiny cells are simply filled
    fn placeholder(&self) -> GlyphBitmap {
        let (w, h) = (self.cell_width as usize, self.cell_height as usize);
        if w < 4 || h < 4 {
            return self.fill_rects(&[eighths(0, 0, 8, 8)], 255);
        }

        let (mut coverage, stride) = self.empty_cell();
        for (y, row) in coverage.chunks_exact_mut(stride).enumerate().take(h - 1).skip(1) {
            if y == 1 || y == h - 2 {
                row[1..w - 1].fill(255);
            } else {
                row[1] = 255;
                row[w - 2] = 255;
            }
        }
        self.cell_bitmap(coverage)
    }
}

impl Default for BlockFont {
    fn default() -> Self {
        Self::for_size(FALLBACK_SIZE)
    }
}

impl GlyphSource for BlockFont {
    fn rasterize(&self, ch: char) -> GlyphBitmap {
        if ch.is_whitespace() {
            return GlyphBitmap::blank(self.cell_width as f32);
        }
        match block_shape(ch) {
            Some((rects, value)) => self.fill_rects(&rects, value),
            None => self.placeholder(),
        }
    }

    fn ascent(&self) -> f32 {
        self.cell_height as f32
    }

    fn line_height(&self) -> f32 {
        self.cell_height as f32
    }

    fn name(&self) -> &str {
        "built-in block font"
    }
}
