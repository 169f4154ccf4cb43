//! Fill colors
//!
//! Straight (non-premultiplied) RGBA colors with `#rrggbb` / `#rrggbbaa`
//! parsing so they can live in config files as plain strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced while parsing a hex color string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string did not start with `#`
    #[error("Color '{0}' must start with '#'")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("Color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),

    /// A non-hex digit was found
    #[error("Color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// RGBA fill color applied uniformly to every rendered glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FillColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl FillColor {
    /// Logo cyan, `#00c2ff`
    pub const LOGO_CYAN: Self = Self::rgba(0, 194, 255, 255);

    /// White with zero alpha, the canvas background
    pub const TRANSPARENT: Self = Self::rgba(255, 255, 255, 0);

    /// Construct a color from its four channels
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as an array, the layout `image::Rgba` expects
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for FillColor {
    fn default() -> Self {
        Self::LOGO_CYAN
    }
}

impl From<[u8; 4]> for FillColor {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl FromStr for FillColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for FillColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FillColor> for String {
    fn from(color: FillColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for FillColor {
    /// Opaque colors print as `#rrggbb`, others as `#rrggbbaa`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
