use clap::Parser;
use std::path::PathBuf;

use icongen::types::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(name = "icongen", version, about = "Generate web app icons from a base logo")]
pub struct CliArgs {
    /// Base logo image (any format the decoder understands)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory receiving logo192.png, logo512.png and favicon.ico
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Print a JSON report of the generated files
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_paths() {
        let args = CliArgs::try_parse_from(["icongen"]).unwrap();
        assert_eq!(args.input, PathBuf::from("logo_raw.png"));
        assert_eq!(args.output_dir, PathBuf::from("public"));
        assert!(!args.log);
        assert!(!args.json);
    }

    #[test]
    fn paths_can_be_overridden() {
        let args =
            CliArgs::try_parse_from(["icongen", "-i", "art/logo.webp", "--output-dir", "dist"])
                .unwrap();
        assert_eq!(args.input, PathBuf::from("art/logo.webp"));
        assert_eq!(args.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
