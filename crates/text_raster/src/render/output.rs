//! PNG serialization

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::RenderResult;

/// Encode `image` as PNG in memory
pub fn encode_png(image: &RgbaImage) -> RenderResult<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write `image` to `path` as PNG, creating missing parent directories
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("Wrote {}x{} PNG to {:?}", image.width(), image.height(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_encode_png_signature() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 0]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_save_png_creates_directories() {
        let dir = std::env::temp_dir().join(format!("text_raster_out_{}", std::process::id()));
        let path = dir.join("nested").join("logo.png");
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 194, 255, 128]));

        save_png(&image, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(3, 3).0, [0, 194, 255, 128]);
    }
}
