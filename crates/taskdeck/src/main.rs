//! Taskdeck CLI binary.

use anyhow::Result;
use taskdeck::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the taskdeck CLI.
///
/// Uses tokio's current_thread runtime for simplicity and lower overhead.
/// This is appropriate for CLI applications with sequential I/O-bound operations.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via the RUST_LOG environment variable
    // Example: RUST_LOG=taskdeck=debug,taskdeck_jsonl=trace cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("taskdeck=info,taskdeck_jsonl=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting taskdeck CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Taskdeck CLI completed successfully");
    Ok(())
}
