//! Non-interactive commands: query the AI, or let it play itself.

use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use strictly_tictactoe::{AiError, Board, Game, Player, search};
use tracing::{debug, info, instrument};

/// The AI's answer for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct BestMoveReport {
    /// Board searched, one character per square.
    board: String,
    /// Mark the AI played.
    ai: Player,
    /// Chosen square (0-8).
    index: usize,
    /// Chosen square by name.
    label: String,
    /// Minimax value from the AI's side.
    score: i32,
    /// Positions visited.
    nodes: u64,
}

impl std::fmt::Display for BestMoveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} plays {} ({}), score {}, {} nodes searched",
            self.ai, self.index, self.label, self.score, self.nodes
        )
    }
}

/// Asks the AI for its move on `board`.
///
/// # Errors
///
/// Returns [`AiError::NoLegalMove`] on a full or decided board.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, ai: Player) -> Result<BestMoveReport, AiError> {
    let report = search(board, ai, ai.opponent())?;
    Ok(BestMoveReport::new(
        board.to_string(),
        ai,
        report.position.to_index(),
        report.position.label().to_string(),
        report.score,
        report.nodes,
    ))
}

/// Plays `games` AI-vs-AI games and returns the tally.
///
/// # Errors
///
/// Propagates search and move errors, which only a broken engine would
/// produce.
#[instrument]
pub fn self_play(games: u32) -> Result<Scoreboard> {
    let mut scores = Scoreboard::new();

    for n in 0..games {
        let mut game = Game::new();
        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }
            game = ai_turn(&game)?;
        };

        debug!(game = n + 1, %outcome, "Self-play game finished");
        scores.record(&outcome);
    }

    info!(games, draws = scores.draws(), "Self-play complete");
    Ok(scores)
}

/// Lets the player to move pick its best move and plays it.
fn ai_turn(game: &Game) -> Result<Game> {
    let me = game.to_move();
    let report = search(game.board(), me, me.opponent())
        .with_context(|| format!("No move for {} on {}", me, game.board()))?;
    game.play(report.position)
        .with_context(|| format!("{} chose an illegal move at {}", me, report.position))
}
