//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] value. Nothing here holds state: callers
//! pass a board in and get a new board (or a verdict) back, which keeps the
//! rules usable both by [`crate::Game`] and by the search in [`crate::ai`].

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, winning_line};

use crate::{Board, MoveError, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Adjudicates a board: first completed line wins, else a full board draws.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Strict alternation: X, O, X, ...
pub fn next_player(current: Player) -> Player {
    current.opponent()
}

/// Places `player` at `index` and returns the new board with its status.
///
/// The input board is never modified; on error the caller still holds the
/// unchanged board.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not in 0..=8
/// - [`MoveError::GameOver`] if the board is already won or drawn
/// - [`MoveError::SquareOccupied`] if the square is taken
#[instrument(skip(board), fields(board = %board))]
pub fn apply_move(
    board: &Board,
    index: usize,
    player: Player,
) -> Result<(Board, GameStatus), MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if evaluate(board).is_over() {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    let mut next = *board;
    next.set(pos, Square::Occupied(player));
    let status = evaluate(&next);

    debug!(?pos, ?status, "Move applied");
    Ok((next, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board: Board = "XOXOX....".parse().unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn test_apply_move_completes_row() {
        let board: Board = "XX.OO....".parse().unwrap();
        let (after, status) = apply_move(&board, 2, Player::X).unwrap();
        assert_eq!(status, GameStatus::Won(Player::X));
        let (line, _) = winning_line(&after).unwrap();
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_apply_move_last_square_draws() {
        let board: Board = "XOXOXOOX.".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::InProgress);
        // O fills the corner; an X there would complete the 0-4-8 diagonal.
        let (_, status) = apply_move(&board, 8, Player::O).unwrap();
        assert_eq!(status, GameStatus::Draw);
    }

    #[test]
    fn test_apply_move_occupied_leaves_board_unchanged() {
        let board: Board = "X........".parse().unwrap();
        let before = board;
        let result = apply_move(&board, 0, Player::O);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        assert_eq!(
            apply_move(&Board::new(), 9, Player::X),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_apply_move_after_win_rejected() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(apply_move(&board, 8, Player::O), Err(MoveError::GameOver));
    }

    #[test]
    fn test_next_player_alternates() {
        assert_eq!(next_player(Player::X), Player::O);
        assert_eq!(next_player(next_player(Player::X)), Player::X);
    }
}
