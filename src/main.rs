//! `ssimcheck` CLI - validate that an external noise-injection step changed
//! an image without making the change visible.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ssimcheck::{compare, load_image, Error, CANDIDATE_FILENAME, ORIGINAL_FILENAME};

/// Compare an original image against its noise-injected version with SSIM.
#[derive(Parser, Debug)]
#[command(name = "ssimcheck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing `input.jpg` and `input_noisy.jpg`.
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ssimcheck={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::ImageLoad { .. }) => {
            eprintln!("Error: {err}");
            eprintln!();
            eprintln!("To use this tool:");
            eprintln!("1. Place your original image as '{ORIGINAL_FILENAME}' in the input directory");
            eprintln!("2. Generate the noise-injected version with the injector app");
            eprintln!("3. Save the noisy image as '{CANDIDATE_FILENAME}' in the same directory");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Unexpected error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("SSIM noise-injection validation");
    println!("{}", "=".repeat(50));

    tracing::info!("loading images from {}", args.dir.display());
    let original = load_image(&args.dir, ORIGINAL_FILENAME)?;
    let candidate = load_image(&args.dir, CANDIDATE_FILENAME)?;
    tracing::debug!("loaded {ORIGINAL_FILENAME} and {CANDIDATE_FILENAME}");
    println!();

    let report = compare(&original, &candidate)?;
    report.print();

    println!();
    println!("{}", "=".repeat(50));
    println!("Analysis complete.");

    Ok(())
}
