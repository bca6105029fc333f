//! Strictly Minimax - terminal entry point.

use anyhow::Result;
use clap::Parser;
use strictly_minimax::SessionManager;
use strictly_minimax_cli::{AppConfig, Cli, Command, best_move, play, self_play};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let show_scores = matches!(cli.command, Command::Play { show_scores: true });
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(
        cli.seed,
        cli.log_filter.clone(),
        show_scores,
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Starting strictly_minimax");

    match cli.command {
        Command::Play { .. } => {
            let sessions = SessionManager::with_seed(*config.seed());
            let stdin = std::io::stdin();
            play(&sessions, &config, stdin.lock(), std::io::stdout())?;
        }
        Command::BestMove { board } => {
            let result = best_move(&board)?;
            match result.best {
                Some(pos) => println!("{} (score {})", pos, result.score),
                None => println!("No move (score {})", result.score),
            }
        }
        Command::SelfPlay => {
            self_play(std::io::stdout())?;
        }
    }

    Ok(())
}
