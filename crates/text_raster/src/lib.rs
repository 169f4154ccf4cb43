//! # Text Raster
//!
//! Renders blocks of monospace text art onto transparent RGBA images.
//!
//! ## Features
//!
//! - **Monospace Layout**: one representative glyph sizes every cell
//! - **Font Fallback**: ordered candidate font files, then a built-in block font
//! - **Transparent Output**: straight-alpha RGBA canvases written as PNG
//! - **Config Files**: TOML or RON render configurations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use text_raster::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::default();
//!     let font = load_with_fallback(&config.font.candidates, config.font.size);
//!     let image = TextRenderer::from_config(&config).render(&config.text, &font, config.color)?;
//!     save_png(&image, &config.output)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod color;
pub mod config;
pub mod font;
pub mod render;

pub use color::{ColorParseError, FillColor};
pub use config::{Config, ConfigError, FontConfig, RenderConfig};
pub use font::{BlockFont, FontError, FontHandle, GlyphBitmap, GlyphSource, TrueTypeFont};
pub use render::{render, RenderError, RenderResult, TextRenderer};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        color::FillColor,
        config::{Config, RenderConfig},
        font::{load_with_fallback, FontHandle, GlyphSource},
        render::{render, save_png, RenderError, TextRenderer},
    };
}
