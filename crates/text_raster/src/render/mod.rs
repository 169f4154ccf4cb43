//! Text-to-image rendering
//!
//! Measures a block of text with one representative glyph, sizes a
//! transparent canvas to fit it and draws the lines top to bottom.

pub mod canvas;
pub mod layout;
pub mod output;
pub mod renderer;


pub use canvas::Canvas;
pub use layout::{GlyphMetrics, LineSequence, TextLayout};
pub use output::{encode_png, save_png};
pub use renderer::{render, TextRenderer, DEFAULT_PADDING, REPRESENTATIVE_GLYPH};

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering or writing an image
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The text had no non-blank lines
    #[error("Input text contains no non-blank lines")]
    EmptyInput,

    /// The representative glyph measured as zero-sized
    #[error("Glyph '{0}' has an empty bounding box and the font reports no usable size")]
    DegenerateGlyph(char),

    /// The computed canvas does not fit in u32 pixel dimensions
    #[error("Canvas of {columns} columns x {rows} rows is too large")]
    CanvasTooLarge {
        /// Longest line, in characters
        columns: usize,
        /// Number of lines
        rows: usize,
    },

    /// PNG encoding failed
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
