//! High-level, ergonomic library API: turn a base logo into the icon set on disk.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating icongen.
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use crate::core::params::IconSetParams;
use crate::core::processing::pipeline::render_icon_set;
use crate::core::processing::save::{GeneratedAsset, save_icon_set};
use crate::error::{Error, Result};
use crate::io::reader::load_source_image;
use crate::types::CropWindow;

/// Summary of one successful run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    /// Present when the source was not square
    pub crop: Option<CropWindow>,
    pub assets: Vec<GeneratedAsset>,
}

/// Generate `logo192.png`, `logo512.png` and `favicon.ico` in `output_dir`.
pub fn generate_icons(input: &Path, output_dir: &Path) -> Result<GenerationReport> {
    generate_icons_with_params(input, output_dir, &IconSetParams::default())
}

/// Generate an icon set described by `params`.
///
/// Everything is decoded, resized and encoded before the output directory is
/// touched, so a failure in those steps leaves no files behind.
pub fn generate_icons_with_params(
    input: &Path,
    output_dir: &Path,
    params: &IconSetParams,
) -> Result<GenerationReport> {
    let source = load_source_image(input)?;
    let rendered = render_icon_set(source, params)?;
    let assets = save_icon_set(&rendered, output_dir)?;

    Ok(GenerationReport {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        source_width: rendered.source_width,
        source_height: rendered.source_height,
        crop: rendered.crop,
        assets,
    })
}

/// Run [`generate_icons`] and log any failure instead of returning it.
pub fn generate_icons_reported(input: &Path, output_dir: &Path) -> Option<GenerationReport> {
    match generate_icons(input, output_dir) {
        Ok(report) => {
            info!(
                "Generated {} assets in {}",
                report.assets.len(),
                output_dir.display()
            );
            Some(report)
        }
        Err(e) => {
            error!("{}", failure_message(input, &e));
            None
        }
    }
}

/// User-facing line for a failed run.
pub fn failure_message(input: &Path, err: &Error) -> String {
    match err {
        Error::InputNotFound { path } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.display().to_string());
            format!(
                "Error: {} not found. Please ensure {} is in the project root.",
                path.display(),
                name
            )
        }
        other => format!("An error occurred: {}", other),
    }
}
