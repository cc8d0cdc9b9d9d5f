//! I/O layer: decoding the source logo (`reader`) and encoding/writing the
//! generated PNG and ICO assets (`writers`).
pub mod reader;
pub use reader::load_source_image;

pub mod writers;
pub use writers::ico::encode_ico;
pub use writers::png::encode_png;
pub use writers::write_asset;
