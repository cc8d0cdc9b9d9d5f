use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::processing::pipeline::RenderedIconSet;
use crate::error::Result;
use crate::io::writers::write_asset;
use crate::types::AssetFormat;

/// A file written by [`save_icon_set`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub format: AssetFormat,
    pub sizes: Vec<u32>,
}

/// Create `output_dir` if needed and write every rendered asset into it,
/// overwriting existing files of the same name.
pub fn save_icon_set(rendered: &RenderedIconSet, output_dir: &Path) -> Result<Vec<GeneratedAsset>> {
    if !output_dir.exists() {
        info!("Creating output directory {:?}", output_dir);
    }
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(rendered.assets.len());
    for asset in &rendered.assets {
        let path = output_dir.join(&asset.file_name);
        write_asset(&path, &asset.bytes)?;
        info!("Successfully generated: {}", path.display());
        written.push(GeneratedAsset {
            path,
            format: asset.format,
            sizes: asset.sizes.clone(),
        });
    }

    Ok(written)
}
