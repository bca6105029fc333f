//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the machine's random opening
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal (you are X)
    Play {
        /// Print the engine's evaluation after every turn
        #[arg(long)]
        show_scores: bool,
    },

    /// Print the machine's reply for a position
    BestMove {
        /// Board in row-major compact form, e.g. "X...O...X"
        #[arg(long)]
        board: String,
    },

    /// Let minimax play both sides from the empty board
    SelfPlay,
}
