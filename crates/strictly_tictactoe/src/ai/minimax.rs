//! Exhaustive minimax search.
//!
//! The tree under a 9-square board has well under a million nodes, so the
//! search runs to the leaves with no pruning and no transposition table.

use crate::rules::{self, GameStatus};
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Score of a loss found at depth zero.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Why the AI could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AiError {
    /// The board is full or already decided.
    #[display("No legal move available")]
    NoLegalMove,

    /// The AI and its opponent were given the same mark.
    #[display("AI and opponent cannot both play {}", _0)]
    SameSide(Player),
}

impl std::error::Error for AiError {}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The chosen move.
    pub position: Position,
    /// Minimax value of the chosen move from the AI's side.
    pub score: i32,
    /// Positions visited, the root's children included.
    pub nodes: u64,
}

/// Returns the optimal move for `ai` on `board`.
///
/// Ties go to the lowest index.
///
/// # Errors
///
/// [`AiError::NoLegalMove`] on a full or decided board,
/// [`AiError::SameSide`] if `ai == opponent`.
pub fn find_best_move(board: &Board, ai: Player, opponent: Player) -> Result<Position, AiError> {
    search(board, ai, opponent).map(|report| report.position)
}

/// Runs the search and reports the chosen move with its score.
///
/// # Errors
///
/// As [`find_best_move`].
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn search(board: &Board, ai: Player, opponent: Player) -> Result<SearchReport, AiError> {
    if ai == opponent {
        return Err(AiError::SameSide(ai));
    }
    if rules::evaluate(board).is_over() {
        return Err(AiError::NoLegalMove);
    }

    let mut minimax = Minimax {
        ai,
        opponent,
        nodes: 0,
    };

    let mut best: Option<(Position, i32)> = None;
    for pos in board.empty_positions() {
        let score = minimax.score(&with_mark(board, pos, ai), 0, false);
        trace!(?pos, score, "Root move scored");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (position, score) = best.ok_or(AiError::NoLegalMove)?;
    debug!(?position, score, nodes = minimax.nodes, "Search complete");

    Ok(SearchReport {
        position,
        score,
        nodes: minimax.nodes,
    })
}

/// Copy of `board` with `player` placed at `pos`.
fn with_mark(board: &Board, pos: Position, player: Player) -> Board {
    let mut child = *board;
    child.set(pos, Square::Occupied(player));
    child
}

struct Minimax {
    ai: Player,
    opponent: Player,
    nodes: u64,
}

impl Minimax {
    /// Value of `board` for the AI, `depth` plies below the root move.
    fn score(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match rules::evaluate(board) {
            GameStatus::Won(player) if player == self.ai => return WIN_SCORE - depth,
            GameStatus::Won(_) => return LOSS_SCORE + depth,
            GameStatus::Draw => return 0,
            GameStatus::InProgress => {}
        }

        let mark = if maximizing { self.ai } else { self.opponent };
        let children = board
            .empty_positions()
            .map(|pos| self.score(&with_mark(board, pos, mark), depth + 1, !maximizing));

        let best = if maximizing {
            children.max()
        } else {
            children.min()
        };
        // InProgress guarantees at least one empty square.
        best.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        // O can finish the middle row at 5.
        let b = board("XX.OO.X..");
        assert_eq!(
            find_best_move(&b, Player::O, Player::X),
            Ok(Position::MiddleRight)
        );
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // X threatens the top row; O must block at 2.
        let b = board("XX..O....");
        assert_eq!(
            find_best_move(&b, Player::O, Player::X),
            Ok(Position::TopRight)
        );
    }

    #[test]
    fn test_immediate_win_scores_full_value() {
        let b = board("XX.OO.X..");
        let report = search(&b, Player::O, Player::X).unwrap();
        assert_eq!(report.score, WIN_SCORE);
    }

    #[test]
    fn test_prefers_faster_win() {
        // O at 2 blocks and forks for a win two plies later; O at 4 wins now.
        let b = board("XX.O.OX..");
        let report = search(&b, Player::O, Player::X).unwrap();
        assert_eq!(report.position, Position::Center);
        assert_eq!(report.score, WIN_SCORE);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every opening draws with best play.
        assert_eq!(
            find_best_move(&Board::new(), Player::O, Player::X),
            Ok(Position::TopLeft)
        );
        assert_eq!(
            find_best_move(&Board::new(), Player::X, Player::O),
            Ok(Position::TopLeft)
        );
    }

    #[test]
    fn test_corner_opening_answered_with_center() {
        let b = board("X........");
        assert_eq!(
            find_best_move(&b, Player::O, Player::X),
            Ok(Position::Center)
        );
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let b = board("X...O....");
        let before = b;
        let _ = find_best_move(&b, Player::X, Player::O);
        assert_eq!(b, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOXOXXOXO");
        assert_eq!(
            find_best_move(&b, Player::O, Player::X),
            Err(AiError::NoLegalMove)
        );
    }

    #[test]
    fn test_won_board_has_no_move() {
        let b = board("XXXOO....");
        assert_eq!(
            find_best_move(&b, Player::O, Player::X),
            Err(AiError::NoLegalMove)
        );
    }

    #[test]
    fn test_same_side_rejected() {
        assert_eq!(
            find_best_move(&Board::new(), Player::O, Player::O),
            Err(AiError::SameSide(Player::O))
        );
    }

    #[test]
    fn test_last_square_is_forced() {
        let b = board("XOXOXOOX.");
        let report = search(&b, Player::O, Player::X).unwrap();
        assert_eq!(report.position, Position::BottomRight);
        assert_eq!(report.score, 0);
        assert_eq!(report.nodes, 1);
    }
}
