use serde::{Deserialize, Serialize};

use crate::types::{ICO_FILE_NAME, ICO_SIZES, PNG_SIZES, png_file_name};

/// Output set parameters, serializable for presets and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSetParams {
    /// One `logo{size}.png` per entry
    pub png_sizes: Vec<u32>,
    /// Layers embedded in the icon container; written largest first
    pub ico_sizes: Vec<u32>,
    pub ico_file_name: String,
}

impl IconSetParams {
    pub fn png_file_name(&self, size: u32) -> String {
        png_file_name(size)
    }

    /// ICO layer sizes sorted largest to smallest, duplicates removed.
    pub fn ico_layers(&self) -> Vec<u32> {
        let mut sizes = self.ico_sizes.clone();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();
        sizes
    }
}

impl Default for IconSetParams {
    fn default() -> Self {
        Self {
            png_sizes: PNG_SIZES.to_vec(),
            ico_sizes: ICO_SIZES.to_vec(),
            ico_file_name: ICO_FILE_NAME.to_string(),
        }
    }
}
