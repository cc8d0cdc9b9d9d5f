use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Load the base logo and normalize it to 8-bit RGBA.
///
/// A missing path is reported as [`Error::InputNotFound`] before the decoder is
/// involved. The format is guessed from the file contents, not the extension.
pub fn load_source_image(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    debug!("Decoding {:?} as {:?}", path, reader.format());
    let image = reader.decode()?;
    debug!(
        "Decoded {}x{} ({:?})",
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempdir().unwrap();
        let err = load_source_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(err.is_input_not_found());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo_raw.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn format_is_guessed_from_contents() {
        let dir = tempdir().unwrap();
        // PNG bytes behind a misleading extension
        let path = dir.path().join("logo.jpg");
        RgbaImage::from_pixel(3, 2, Rgba([5, 6, 7, 255]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let image = load_source_image(&path).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([5, 6, 7, 255]));
    }
}
