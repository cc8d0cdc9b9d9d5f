use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Resize a square RGBA image to `size`x`size` with a Lanczos3 convolution.
pub fn resize_square(image: &RgbaImage, size: u32) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    let (width, height) = image.dimensions();
    if width != height {
        return Err(Error::NotSquare { width, height });
    }

    // If already at requested size, skip resizing
    if width == size {
        debug!("Source already {}x{}, copying", size, size);
        return Ok(image.clone());
    }

    debug!("Resizing {}x{} -> {}x{}", width, height, size, size);
    let pixels = resize_rgba8(image.as_raw(), width, height, size, size)?;

    RgbaImage::from_raw(size, size, pixels).ok_or_else(|| {
        Error::Processing(format!("resized buffer does not fit {}x{}", size, size))
    })
}

/// Resize interleaved RGBA8 pixels. Alpha is premultiplied during the convolution.
pub fn resize_rgba8(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data.to_vec(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}
