//! Game-over notifications for the presentation layer.

use super::rules::{self, WinningLine};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// The winning player.
        player: Player,
        /// The line to highlight.
        line: WinningLine,
    },
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Reads the outcome off a board, `None` while the game is in progress.
    pub fn from_board(board: &Board) -> Option<Self> {
        if let Some((line, player)) = rules::winning_line(board) {
            Some(Outcome::Winner { player, line })
        } else if rules::is_full(board) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
