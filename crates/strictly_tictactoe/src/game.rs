//! Explicit game state for tic-tac-toe.
//!
//! A [`Game`] is a value: every transition returns a new game and leaves the
//! receiver untouched, so a rejected move is a no-op for the caller.

use super::action::{Move, MoveError};
use super::outcome::Outcome;
use super::rules::{self, GameStatus};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, player to move and move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

/// Returns a fresh game: empty board, X to move.
pub fn new_game() -> Game {
    Game::new()
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who would have moved next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status, derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_board(&self.board)
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`];
    /// `self` is unchanged either way.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&self, pos: Position) -> Result<Game, MoveError> {
        let (board, status) = rules::apply_move(&self.board, pos.to_index(), self.to_move)?;

        let mut history = self.history.clone();
        history.push(Move::new(self.to_move, pos));

        debug!(?status, moves = history.len(), "Game advanced");
        Ok(Game {
            board,
            to_move: rules::next_player(self.to_move),
            history,
        })
    }

    /// Places the current player's mark at a raw board index.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus [`MoveError::OutOfBounds`].
    pub fn play_index(&self, index: usize) -> Result<Game, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Applies a move, checking that it is made by the player to move.
    ///
    /// # Errors
    ///
    /// As [`Game::play`], plus [`MoveError::WrongPlayer`].
    #[instrument(skip(self))]
    pub fn play_as(&self, action: Move) -> Result<Game, MoveError> {
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        self.play(action.position)
    }

    /// Returns a fresh game regardless of the current state.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Game {
        Game::new()
    }

    /// Replays moves from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first invalid move's error.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Game, MoveError> {
        moves
            .iter()
            .try_fold(Game::new(), |game, action| game.play_as(*action))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
