//! Command-line interface for tictactoe.

use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Player};

/// Strictly Tic-Tac-Toe - play a friend or an AI that cannot lose
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Starting mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<GameMode>,

        /// Mark the AI plays, X or O (overrides the config file)
        #[arg(long)]
        ai_player: Option<Player>,

        /// AI thinking pause in milliseconds (overrides the config file)
        #[arg(long)]
        think_ms: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the AI's move for a board
    BestMove {
        /// Nine squares, row-major: X, O, and . or _ for empty (e.g. "XX.OO....")
        #[arg(short, long)]
        board: Board,

        /// Mark the AI plays
        #[arg(long, default_value = "O")]
        ai: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the AI play itself and print the tally
    SelfPlay {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from(["tictactoe", "best-move", "--board", "X........"]).unwrap();
        match cli.command {
            Command::BestMove { board, ai, json } => {
                assert_eq!(board.to_string(), "X........");
                assert_eq!(ai, Player::O);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "play",
            "--mode",
            "vs-ai",
            "--ai-player",
            "X",
            "--think-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                ai_player,
                think_ms,
                config,
            } => {
                assert_eq!(mode, Some(GameMode::VsAi));
                assert_eq!(ai_player, Some(Player::X));
                assert_eq!(think_ms, Some(0));
                assert_eq!(config, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_board_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "best-move", "--board", "XO"]).is_err());
    }
}
