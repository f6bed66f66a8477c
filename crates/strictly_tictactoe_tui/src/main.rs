//! Strictly Tic-Tac-Toe - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_tictactoe::{Board, Player};
use strictly_tictactoe_tui::{Cli, Command, GameConfig, GameMode, best_move, run_tui, self_play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            ai_player,
            think_ms,
            config,
        } => run_play(mode, ai_player, think_ms, config.as_deref()).await,
        Command::BestMove { board, ai, json } => {
            init_stderr_tracing();
            run_best_move(&board, ai, json)
        }
        Command::SelfPlay { games, json } => {
            init_stderr_tracing();
            run_self_play(games, json)
        }
    }
}

/// Run the interactive game
async fn run_play(
    mode: Option<GameMode>,
    ai_player: Option<Player>,
    think_ms: Option<u64>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = GameConfig::load(config_path)?.with_overrides(mode, ai_player, think_ms);
    init_file_tracing(config.log_file())?;

    info!(?config, "Configuration resolved");
    run_tui(&config).await
}

#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, ai: Player, json: bool) -> Result<()> {
    let report = best_move(board, ai).context("No move for this board")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", board.display());
        println!();
        println!("{}", report);
    }
    Ok(())
}

#[instrument]
fn run_self_play(games: u32, json: bool) -> Result<()> {
    let scores = self_play(games)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        println!(
            "{} games: X {} / O {} / draws {}",
            scores.total(),
            scores.x_wins(),
            scores.o_wins(),
            scores.draws()
        );
    }
    Ok(())
}

/// Logs to a file so output does not tear the terminal UI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
