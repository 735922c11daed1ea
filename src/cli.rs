//! Command-line interface for the tic-tac-toe TUI.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Where to write tracing output (the TUI owns the terminal)
    #[arg(long, default_value = "tictactoe_replay.log")]
    pub log_file: PathBuf,
}
