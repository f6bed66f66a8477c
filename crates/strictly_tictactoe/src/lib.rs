//! Strictly Tic-Tac-Toe - pure game logic with an unbeatable opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure functions that apply moves and adjudicate boards
//! - **Game**: explicit state value (board, turn, history) built on the rules
//! - **AI**: exhaustive minimax over board copies
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player, find_best_move};
//!
//! let game = Game::new().play_index(0)?;
//! let reply = find_best_move(game.board(), Player::O, Player::X)?;
//! let game = game.play(reply)?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::{AiError, SearchReport, find_best_move, search};
pub use game::{Game, new_game};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{
    GameStatus, WinningLine, apply_move, check_winner, evaluate, is_full, next_player,
    winning_line,
};
pub use types::{Board, BoardParseError, Player, PlayerParseError, Square};
