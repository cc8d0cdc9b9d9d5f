use image::RgbaImage;
use image::imageops;
use tracing::info;

use crate::types::CropWindow;

/// Centered square window for a `width`x`height` source, or `None` when it is already square.
pub fn center_crop_window(width: u32, height: u32) -> Option<CropWindow> {
    if width == height {
        return None;
    }

    let size = width.min(height);
    Some(CropWindow {
        x: (width - size) / 2,
        y: (height - size) / 2,
        size,
    })
}

pub fn center_crop_to_square(image: RgbaImage) -> (RgbaImage, Option<CropWindow>) {
    let (width, height) = image.dimensions();
    match center_crop_window(width, height) {
        None => (image, None),
        Some(window) => {
            info!(
                "Note: Input image is {}x{}. Cropping to square.",
                width, height
            );
            let cropped =
                imageops::crop_imm(&image, window.x, window.y, window.size, window.size).to_image();
            (cropped, Some(window))
        }
    }
}
