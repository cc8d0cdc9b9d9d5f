//! Shared types and constants used across icongen.
//! Includes the fixed output set (`PNG_SIZES`, `ICO_SIZES`, file names),
//! `AssetFormat`, and the `CropWindow` applied to non-square sources.
use serde::{Deserialize, Serialize};

/// Source file read when no input is given.
pub const DEFAULT_INPUT: &str = "logo_raw.png";

/// Directory written when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Square PNG sizes for the web manifest and apple-touch-icon.
pub const PNG_SIZES: [u32; 2] = [192, 512];

/// Layers embedded in the favicon, largest first.
pub const ICO_SIZES: [u32; 4] = [64, 32, 24, 16];

pub const ICO_FILE_NAME: &str = "favicon.ico";

/// File name for a square PNG of the given size, e.g. `logo192.png`.
pub fn png_file_name(size: u32) -> String {
    format!("logo{}.png", size)
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    Png,
    Ico,
}

impl std::fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetFormat::Png => write!(f, "PNG"),
            AssetFormat::Ico => write!(f, "ICO"),
        }
    }
}

/// Square region taken from the source image, in source pixel coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl std::fmt::Display for CropWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.size, self.size, self.x, self.y)
    }
}
