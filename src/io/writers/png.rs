use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::Result;

/// Encode an RGBA image as a PNG byte stream.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let (cols, rows) = image.dimensions();
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);
    encoder.write_image(image.as_raw(), cols, rows, ExtendedColorType::Rgba8)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    #[test]
    fn encoded_png_decodes_to_same_pixels() {
        let image = RgbaImage::from_fn(5, 5, |x, y| Rgba([x as u8 * 40, y as u8 * 40, 7, 128]));
        let bytes = encode_png(&image).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (5, 5));
        assert_eq!(decoded.to_rgba8(), image);
    }

    #[test]
    fn encoding_is_deterministic() {
        let image = RgbaImage::from_pixel(32, 32, Rgba([9, 8, 7, 255]));
        assert_eq!(encode_png(&image).unwrap(), encode_png(&image).unwrap());
    }
}
