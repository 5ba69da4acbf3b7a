use anyhow::Result;

use installer_mock::api::{start_server, AppState};
use installer_mock::cli::Cli;
use installer_mock::core::{config, init_logger};
use installer_mock::sim::SimFlags;

/// Main entry point for the mock installer backend.
///
/// Parses simulation mode tokens, initializes logging, and serves the
/// canned API until the process is terminated.
///
/// # Errors
/// Returns an error if initialization fails (logging, socket bind).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Fold mode tokens into the write-once flag set
    let flags = SimFlags::from_tokens(cli.modes.iter().map(String::as_str));

    start_server(config::PORT, AppState::new(flags)).await?;

    Ok(())
}
