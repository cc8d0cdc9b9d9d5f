//! icongen CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run generation, exit.
//! Generation failures are reported on stdout and still exit with status 0.
//! For programmatic use, prefer the library API (`icongen::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)?;
    Ok(())
}
