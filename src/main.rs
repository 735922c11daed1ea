//! Tic-tac-toe with time travel - terminal UI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file; the terminal belongs to the TUI.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_file = %cli.log_file.display(), "Starting tic-tac-toe TUI");
    tui::run()
}
