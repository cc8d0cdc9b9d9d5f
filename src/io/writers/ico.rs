use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Encode the given layers into a single ICO container, in the order given.
pub fn encode_ico(layers: &[RgbaImage]) -> Result<Vec<u8>> {
    if layers.is_empty() {
        return Err(Error::Processing(
            "icon container needs at least one layer".to_string(),
        ));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for layer in layers {
        let (cols, rows) = layer.dimensions();
        let icon_image = IconImage::from_rgba_data(cols, rows, layer.as_raw().clone());
        icon_dir.add_entry(IconDirEntry::encode(&icon_image)?);
        debug!("ICO layer: {}x{}", cols, rows);
    }

    let mut buffer = Vec::new();
    icon_dir.write(&mut buffer)?;
    Ok(buffer)
}
