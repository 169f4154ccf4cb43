//! Font fallback chain
//!
//! Candidate font files are tried in order; the first one that loads wins.
//! When every candidate fails the built-in [`BlockFont`] is used instead, so
//! loading a font never fails.

use std::path::{Path, PathBuf};

use super::{is_valid_size, BlockFont, FontHandle, TrueTypeFont, MAX_FONT_SIZE};
use crate::render::REPRESENTATIVE_GLYPH;

/// Well-known monospace font locations, most preferred first
const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
];

/// The default candidate list as owned paths
#[must_use]
pub fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect()
}

/// Load the first candidate that parses, falling back to the built-in font
///
/// A size outside `0 < size <= MAX_FONT_SIZE` cannot load any font file, so
/// the candidates are skipped and the built-in font is sized from it instead.
pub fn load_with_fallback<P: AsRef<Path>>(candidates: &[P], size: f32) -> FontHandle {
    if !is_valid_size(size) {
        log::warn!(
            "Font size {}px is outside 0..={}px, using built-in block font",
            size,
            MAX_FONT_SIZE
        );
        return FontHandle::Builtin(BlockFont::for_size(size));
    }

    for path in candidates {
        let path = path.as_ref();
        match TrueTypeFont::from_file(path, size) {
            Ok(font) => {
                log::info!("Using font {:?} at {}px", path, font.size());
                if !font.has_glyph(REPRESENTATIVE_GLYPH) {
                    log::warn!(
                        "{:?} has no '{}' glyph, cell size will come from its placeholder",
                        path,
                        REPRESENTATIVE_GLYPH
                    );
                }
                return FontHandle::TrueType(font);
            }
            Err(e) => log::debug!("Skipping font candidate {:?}: {}", path, e),
        }
    }

    log::warn!(
        "Could not load a monospace font from {} candidate(s), using built-in block font",
        candidates.len()
    );
    FontHandle::Builtin(BlockFont::for_size(size))
}
