#![doc = r#"
icongen — turn one base logo into the icon assets a web app ships.

From a single source image this crate produces:

- `logo192.png` (192×192) and `logo512.png` (512×512) for the web manifest
  and apple-touch-icon,
- `favicon.ico` with 64, 32, 24 and 16 pixel layers, largest first.

Non-square sources are center-cropped to a square first. Every size is
produced with a Lanczos3 convolution.

Quick start
-----------
```rust,no_run
use std::path::Path;

fn main() -> icongen::Result<()> {
    let report = icongen::generate_icons(Path::new("logo_raw.png"), Path::new("public"))?;
    for asset in &report.assets {
        println!("{} {:?}", asset.path.display(), asset.sizes);
    }
    Ok(())
}
```

Fire-and-forget
---------------
[`generate_icons_reported`] logs failures through `tracing` and returns
`None` instead of an error, which is what the CLI uses.

Error handling
--------------
All fallible functions return `icongen::Result<T>`; match on `icongen::Error`
to tell a missing source apart from decode or write failures.

```rust,no_run
use std::path::Path;
use icongen::{generate_icons, Error};

match generate_icons(Path::new("logo_raw.png"), Path::new("public")) {
    Ok(_) => {}
    Err(Error::InputNotFound { path }) => eprintln!("missing {}", path.display()),
    Err(other) => eprintln!("failed: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop, resize and render pipeline.
- [`io`] — source decoding and PNG/ICO writers.
- [`types`] — the fixed asset set and shared types.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::IconSetParams;
pub use crate::core::processing::pipeline::{RenderedAsset, RenderedIconSet};
pub use crate::core::processing::save::GeneratedAsset;
pub use error::{Error, Result};
pub use types::{AssetFormat, CropWindow};

// High-level API re-exports
pub use api::{
    GenerationReport, failure_message, generate_icons, generate_icons_reported,
    generate_icons_with_params,
};
