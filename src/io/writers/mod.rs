//! Encoders for the generated assets plus the shared file writer.
pub mod ico;
pub mod png;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Write encoded bytes to `output`, replacing any existing file.
pub fn write_asset(output: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
