//! Logo generator
//!
//! Renders text art (the built-in logo by default) to a transparent PNG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use text_raster::font::{is_valid_size, load_with_fallback, MAX_FONT_SIZE};
use text_raster::render::save_png;
use text_raster::{Config, FillColor, GlyphSource, RenderConfig, TextRenderer};

fn cli() -> Command {
    Command::new("make_logo")
        .about("Renders text art into a transparent PNG")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Render configuration (.toml or .ron)"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the text art from a file instead of the configuration"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Output PNG path [default: assets/logo.png]"),
        )
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("PATH")
                .action(ArgAction::Append)
                .help("Font file to try before the configured candidates (repeatable)"),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("PX")
                .value_parser(parse_font_size)
                .help("Font size in pixels [default: 20]"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("HEX")
                .value_parser(clap::value_parser!(FillColor))
                .help("Glyph color as #rrggbb or #rrggbbaa [default: #00c2ff]"),
        )
        .arg(
            Arg::new("dump-config")
                .long("dump-config")
                .value_name("FILE")
                .help("Write the effective configuration to FILE and exit"),
        )
}

fn parse_font_size(value: &str) -> Result<f32, String> {
    let size: f32 = value.parse::<f32>().map_err(|e| e.to_string())?;
    if is_valid_size(size) {
        Ok(size)
    } else {
        Err(format!("expected a size in 0 < PX <= {MAX_FONT_SIZE}"))
    }
}

/// Layer command line overrides on top of the loaded configuration
fn resolve_config(matches: &ArgMatches) -> Result<RenderConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RenderConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => RenderConfig::default(),
    };

    if let Some(path) = matches.get_one::<String>("input") {
        config.text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text art from {path}"))?;
    }
    if let Some(path) = matches.get_one::<String>("output") {
        config.output = PathBuf::from(path);
    }
    if let Some(fonts) = matches.get_many::<String>("font") {
        let mut candidates: Vec<PathBuf> = fonts.map(PathBuf::from).collect();
        candidates.append(&mut config.font.candidates);
        config.font.candidates = candidates;
    }
    if let Some(&size) = matches.get_one::<f32>("size") {
        config.font.size = size;
    }
    if let Some(&color) = matches.get_one::<FillColor>("color") {
        config.color = color;
    }

    if !is_valid_size(config.font.size) {
        bail!(
            "Font size {}px is out of range (expected 0 < size <= {})",
            config.font.size,
            MAX_FONT_SIZE
        );
    }

    Ok(config)
}

fn run(config: &RenderConfig) -> Result<()> {
    let font = load_with_fallback(&config.font.candidates, config.font.size);
    log::info!("Rendering with {}", font.name());

    let image = TextRenderer::from_config(config)
        .render(&config.text, &font, config.color)
        .context("Failed to render text art")?;

    save_png(&image, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    println!(
        "Created {} ({}x{})",
        config.output.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;

    if let Some(path) = matches.get_one::<String>("dump-config") {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to write configuration to {path}"))?;
        log::info!("Wrote effective configuration to {}", path);
        return Ok(());
    }

    run(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_defaults_without_arguments() {
        let matches = cli().get_matches_from(["make_logo"]);
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let matches = cli().get_matches_from([
            "make_logo",
            "--output",
            "out/art.png",
            "--font",
            "a.ttf",
            "--font",
            "b.ttf",
            "--size",
            "32",
            "--color",
            "#ff000080",
        ]);
        let config = resolve_config(&matches).unwrap();

        assert_eq!(config.output, PathBuf::from("out/art.png"));
        assert_eq!(config.font.size, 32.0);
        assert_eq!(config.color, FillColor::rgba(255, 0, 0, 128));
        assert_eq!(config.font.candidates[0], PathBuf::from("a.ttf"));
        assert_eq!(config.font.candidates[1], PathBuf::from("b.ttf"));
        assert_eq!(
            config.font.candidates.len(),
            2 + RenderConfig::default().font.candidates.len()
        );
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = cli().try_get_matches_from(["make_logo", "--color", "blue"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_size_is_rejected() {
        for size in ["0", "-12", "nan", "inf", "100000", "big"] {
            let result = cli().try_get_matches_from(["make_logo", "--size", size]);
            assert!(result.is_err(), "--size {size} should be rejected");
        }
        let matches = cli().get_matches_from(["make_logo", "--size", "0.5"]);
        assert_eq!(resolve_config(&matches).unwrap().font.size, 0.5);
    }

    #[test]
    fn test_out_of_range_size_in_config_file_is_rejected() {
        let path = std::env::temp_dir()
            .join(format!("make_logo_size_{}.toml", std::process::id()));
        let config = RenderConfig {
            font: text_raster::FontConfig {
                candidates: Vec::new(),
                size: -20.0,
            },
            ..RenderConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let matches = cli().get_matches_from(["make_logo", "--config", path.to_str().unwrap()]);
        let result = resolve_config(&matches);
        let _ = std::fs::remove_file(&path);

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("out of range"), "{message}");
    }

    #[test]
    fn test_run_writes_png() {
        let dir = std::env::temp_dir().join(format!("make_logo_run_{}", std::process::id()));
        let config = RenderConfig {
            output: dir.join("logo.png"),
            font: text_raster::FontConfig {
                candidates: Vec::new(),
                size: 10.0,
            },
            ..RenderConfig::default()
        };

        run(&config).unwrap();
        let written = std::fs::read(&config.output).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(&written[..4], b"\x89PNG");
    }
}
