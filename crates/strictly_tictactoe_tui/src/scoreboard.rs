//! Session score tally.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Outcome, Player};
use tracing::{debug, instrument};

/// Wins per player and draws, kept for the whole session.
///
/// Restarting a game or switching modes keeps the tally; only
/// [`Scoreboard::reset`] clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        debug!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Score updated");
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Number of games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears all counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
