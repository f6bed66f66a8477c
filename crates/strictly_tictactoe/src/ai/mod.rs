//! AI opponent for tic-tac-toe.
//!
//! The AI never touches the caller's board: it searches over copies and
//! returns a position for the caller to apply through the rules.

mod minimax;

pub use minimax::{AiError, LOSS_SCORE, SearchReport, WIN_SCORE, find_best_move, search};
