//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoder/encoder, and resizer errors, and provides semantic
//! variants for a missing source file and invalid geometry.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Expected a square image, got: {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    /// True when the failure happened before any decoding because the input path is absent.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Error::InputNotFound { .. })
    }
}
