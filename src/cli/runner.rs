use tracing::info;
use tracing_subscriber::EnvFilter;

use icongen::generate_icons_reported;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Plain status lines unless debugging
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(debug)
        .without_time()
        .try_init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    info!("Starting icon generation from {}...", args.input.display());

    // Generation failures are logged inside and never change the exit status
    let report = generate_icons_reported(&args.input, &args.output_dir);

    if args.json {
        if let Some(report) = report {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    info!("Done!");
    Ok(())
}
