//! Command Line Interface (CLI) layer for icongen.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). Generation itself lives in the
//! library; embedders should call `icongen::api` directly.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
