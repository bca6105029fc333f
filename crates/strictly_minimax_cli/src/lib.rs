//! Terminal shell for strictly_minimax.
//!
//! Parses the command line, loads configuration and drives the game core
//! through its session interface.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod shell;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use shell::{best_move, play, self_play};
