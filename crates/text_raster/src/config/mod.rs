//! Configuration system
//!
//! Configs are plain serde structs stored as TOML or RON, chosen by file
//! extension.

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

use crate::color::FillColor;
use crate::font::default_candidates;
use crate::render::DEFAULT_PADDING;

/// The text art rendered when no other text is given
pub const DEFAULT_ART: &str = concat!(
    "▄▀▀▀▀ █   █ ▄▀▀▀▀ ▄▀▀▀▀          ▄▀ █   █ \n",
    " ▀▀▀▄ ▀▀▀▀█  ▀▀▀▄ █     ▀▀▀▀▀  ▄▀   █ █ █ \n",
    "▀▀▀▀  ▀▀▀▀▀ ▀▀▀▀   ▀▀▀▀       ▀      ▀ ▀\n",
);

/// Default output location
pub const DEFAULT_OUTPUT: &str = "assets/logo.png";

/// Default font pixel size
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// On-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Which font to load and at what size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font files to try, most preferred first
    pub candidates: Vec<PathBuf>,
    /// Pixel size
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Everything needed to render and write one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Text art to render
    pub text: String,
    /// Glyph fill color
    pub color: FillColor,
    /// Canvas background, transparent by default
    pub background: FillColor,
    /// Padding around the text block in pixels
    pub padding: u32,
    /// Extra pixels between lines
    pub line_gap: u32,
    /// Where the PNG is written
    pub output: PathBuf,
    /// Font selection
    pub font: FontConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_ART.to_string(),
            color: FillColor::LOGO_CYAN,
            background: FillColor::TRANSPARENT,
            padding: DEFAULT_PADDING,
            line_gap: 0,
            output: PathBuf::from(DEFAULT_OUTPUT),
            font: FontConfig::default(),
        }
    }
}

impl Config for RenderConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("text_raster_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_art_shape() {
        let lines: Vec<&str> = DEFAULT_ART.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().map(|l| l.chars().count()).max(), Some(42));
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("config.toml");
        let config = RenderConfig {
            color: FillColor::rgba(10, 20, 30, 40),
            line_gap: 3,
            ..RenderConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let loaded = RenderConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(written.contains("#0a141e28"));
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("config.ron");
        let config = RenderConfig {
            text: "█\n█".to_string(),
            padding: 0,
            ..RenderConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = RenderConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "color = \"#ff0000\"\n\n[font]\nsize = 32.0\n").unwrap();
        let loaded = RenderConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.color, FillColor::rgba(255, 0, 0, 255));
        assert_eq!(loaded.font.size, 32.0);
        assert_eq!(loaded.font.candidates, default_candidates());
        assert_eq!(loaded.text, DEFAULT_ART);
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let path = temp_path("bad_color.toml");
        std::fs::write(&path, "color = \"cyan\"\n").unwrap();
        let result = RenderConfig::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = RenderConfig::load_from_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

        let result = RenderConfig::default().save_to_file(temp_path("config.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
