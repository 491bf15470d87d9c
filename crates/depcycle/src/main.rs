//! depcycle CLI binary.

use depcycle::cli::{Cli, Outcome};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status when input or configuration could not be processed.
const EXIT_ERROR: u8 = 2;

/// Main entry point for the depcycle CLI.
fn main() -> ExitCode {
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=depcycle=debug depcycle check deps.txt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depcycle=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting depcycle CLI");

    let cli = Cli::parse_args();
    match cli.execute() {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::CycleFound) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
