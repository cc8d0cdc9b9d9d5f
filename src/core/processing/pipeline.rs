use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::IconSetParams;
use crate::core::processing::crop::center_crop_to_square;
use crate::core::processing::resize::resize_square;
use crate::error::{Error, Result};
use crate::io::writers::ico::encode_ico;
use crate::io::writers::png::encode_png;
use crate::types::{AssetFormat, CropWindow};

/// One encoded output file, held in memory until saved.
#[derive(Debug, Clone)]
pub struct RenderedAsset {
    pub file_name: String,
    pub format: AssetFormat,
    /// Pixel sizes contained in the file; several for an icon container
    pub sizes: Vec<u32>,
    pub bytes: Vec<u8>,
}

/// Every asset of an icon set, encoded and ready to write.
#[derive(Debug, Clone)]
pub struct RenderedIconSet {
    pub source_width: u32,
    pub source_height: u32,
    pub crop: Option<CropWindow>,
    pub assets: Vec<RenderedAsset>,
}

/// Crop, resize and encode every asset. Performs no disk I/O.
pub fn render_icon_set(source: RgbaImage, params: &IconSetParams) -> Result<RenderedIconSet> {
    let (source_width, source_height) = source.dimensions();
    if source_width == 0 || source_height == 0 {
        return Err(Error::Processing(format!(
            "source image is empty ({}x{})",
            source_width, source_height
        )));
    }

    let (square, crop) = center_crop_to_square(source);
    if let Some(window) = crop {
        debug!("Crop window: {}", window);
    }

    let mut assets = Vec::with_capacity(params.png_sizes.len() + 1);

    for &size in &params.png_sizes {
        let resized = resize_square(&square, size)?;
        assets.push(RenderedAsset {
            file_name: params.png_file_name(size),
            format: AssetFormat::Png,
            sizes: vec![size],
            bytes: encode_png(&resized)?,
        });
    }

    let ico_sizes = params.ico_layers();
    if !ico_sizes.is_empty() {
        let layers = ico_sizes
            .iter()
            .map(|&size| resize_square(&square, size))
            .collect::<Result<Vec<_>>>()?;
        assets.push(RenderedAsset {
            file_name: params.ico_file_name.clone(),
            format: AssetFormat::Ico,
            sizes: ico_sizes,
            bytes: encode_ico(&layers)?,
        });
    }

    info!(
        "Rendered {} assets from {}x{} source",
        assets.len(),
        source_width,
        source_height
    );

    Ok(RenderedIconSet {
        source_width,
        source_height,
        crop,
        assets,
    })
}
