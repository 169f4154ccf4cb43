//! RGBA drawing surface
//!
//! Glyph coverage is composited source-over onto straight-alpha pixels.
//! Anything drawn outside the canvas is clipped.

use image::{Rgba, RgbaImage};

use crate::color::FillColor;
use crate::font::GlyphBitmap;

/// In-memory pixel buffer being built up before serialization
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas filled with `background`
    #[must_use]
    pub fn new(width: u32, height: u32, background: FillColor) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(background.to_array())),
        }
    }

    /// Canvas size as `(width, height)`
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Draw `glyph` with its top-left corner at `(x, y)`
    pub fn draw_glyph(&mut self, x: i64, y: i64, glyph: &GlyphBitmap, color: FillColor) {
        let (width, height) = self.dimensions();

        for gy in 0..glyph.height {
            let py = y + i64::from(gy);
            if py < 0 || py >= i64::from(height) {
                continue;
            }
            for gx in 0..glyph.width {
                let px = x + i64::from(gx);
                if px < 0 || px >= i64::from(width) {
                    continue;
                }
                let coverage = glyph.coverage_at(gx, gy);
                if coverage > 0 {
                    self.blend(px as u32, py as u32, coverage, color);
                }
            }
        }
    }

    /// Composite `color` scaled by `coverage` over the pixel at `(x, y)`
    fn blend(&mut self, x: u32, y: u32, coverage: u8, color: FillColor) {
        let src_a = u32::from(color.a) * u32::from(coverage) / 255;
        if src_a == 0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x, y);
        let [dr, dg, db, da] = dst.0;
        let dst_a = u32::from(da) * (255 - src_a) / 255;
        let out_a = src_a + dst_a;

        let mix = |s: u8, d: u8| -> u8 {
            ((u32::from(s) * src_a + u32::from(d) * dst_a + out_a / 2) / out_a) as u8
        };

        *dst = Rgba([
            mix(color.r, dr),
            mix(color.g, dg),
            mix(color.b, db),
            out_a as u8,
        ]);
    }

    /// Finish drawing and take the image
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> GlyphBitmap {
        GlyphBitmap {
            width,
            height,
            left: 0,
            top: height as i32,
            advance: width as f32,
            coverage: vec![value; (width * height) as usize],
        }
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(3, 2, FillColor::TRANSPARENT);
        assert_eq!(canvas.dimensions(), (3, 2));
        assert!(canvas.into_image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_full_coverage_over_transparent_is_the_fill() {
        let mut canvas = Canvas::new(4, 4, FillColor::TRANSPARENT);
        canvas.draw_glyph(1, 1, &solid(2, 2, 255), FillColor::LOGO_CYAN);

        let image = canvas.into_image();
        assert_eq!(image.get_pixel(1, 1).0, [0, 194, 255, 255]);
        assert_eq!(image.get_pixel(2, 2).0, [0, 194, 255, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 0]);
        assert_eq!(image.get_pixel(3, 3).0, [255, 255, 255, 0]);
    }

    #[test]
    fn test_partial_coverage_keeps_color_and_scales_alpha() {
        let mut canvas = Canvas::new(1, 1, FillColor::TRANSPARENT);
        canvas.draw_glyph(0, 0, &solid(1, 1, 128), FillColor::LOGO_CYAN);
        assert_eq!(canvas.into_image().get_pixel(0, 0).0, [0, 194, 255, 128]);
    }

    #[test]
    fn test_blend_over_opaque_pixel() {
        let mut canvas = Canvas::new(1, 1, FillColor::rgba(0, 0, 0, 255));
        canvas.draw_glyph(0, 0, &solid(1, 1, 255), FillColor::rgba(255, 255, 255, 128));
        let [r, g, b, a] = canvas.into_image().get_pixel(0, 0).0;
        assert_eq!(a, 255);
        assert_eq!((r, g, b), (128, 128, 128));
    }

    #[test]
    fn test_drawing_is_clipped() {
        let mut canvas = Canvas::new(2, 2, FillColor::TRANSPARENT);
        canvas.draw_glyph(-1, -1, &solid(2, 2, 255), FillColor::LOGO_CYAN);
        canvas.draw_glyph(1, 1, &solid(5, 5, 255), FillColor::LOGO_CYAN);

        let image = canvas.into_image();
        assert_eq!(image.get_pixel(0, 0).0[3], 255);
        assert_eq!(image.get_pixel(1, 0).0[3], 0);
        assert_eq!(image.get_pixel(0, 1).0[3], 0);
        assert_eq!(image.get_pixel(1, 1).0[3], 255);
    }
}
