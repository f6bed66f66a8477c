//! Application state and logic.

use crate::input::{self, Command};
use crate::mode::GameMode;
use crate::scoreboard::Scoreboard;
use derive_getters::Getters;
use strictly_tictactoe::{Game, GameStatus, MoveError, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns everything the core leaves to the presentation layer: the mode,
/// the scoreboard, the cursor and whether the result dialog is showing.
#[derive(Debug, Getters)]
pub struct App {
    /// The game in play.
    game: Game,
    /// Two-player or vs-AI.
    mode: GameMode,
    /// Mark the AI plays in vs-AI mode.
    ai_player: Player,
    /// Session tally.
    scoreboard: Scoreboard,
    /// Highlighted square.
    cursor: Position,
    /// True while the game-over dialog is open.
    show_result: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(mode: GameMode, ai_player: Player) -> Self {
        Self {
            game: Game::new(),
            mode,
            ai_player,
            scoreboard: Scoreboard::new(),
            cursor: Position::Center,
            show_result: false,
        }
    }

    /// True when the AI owes the next move.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::VsAi && !self.game.is_over() && self.game.to_move() == self.ai_player
    }

    /// Display name for a mark: "AI" for the AI's mark in vs-AI mode.
    pub fn player_label(&self, player: Player) -> String {
        if self.mode == GameMode::VsAi && player == self.ai_player {
            "AI".to_string()
        } else {
            format!("Player {}", player)
        }
    }

    /// One-line status under the board.
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress if self.is_ai_turn() => "AI is thinking...".to_string(),
            GameStatus::InProgress => format!("{}'s Turn", self.player_label(self.game.to_move())),
            GameStatus::Won(player) => format!("{} Wins!", self.player_label(player)),
            GameStatus::Draw => "Game Over - Draw!".to_string(),
        }
    }

    /// Headline for the game-over dialog, `None` while playing.
    pub fn result_text(&self) -> Option<String> {
        self.game.outcome().map(|outcome| match outcome.winner() {
            Some(player) => format!("{} Wins!", self.player_label(player)),
            None => "It's a Draw!".to_string(),
        })
    }

    /// Places a human move.
    ///
    /// # Errors
    ///
    /// Refuses with [`MoveError::WrongPlayer`] while the AI is to move, and
    /// passes through the engine's refusals. The game is unchanged on error.
    #[instrument(skip(self))]
    pub fn place_human(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_ai_turn() {
            return Err(MoveError::WrongPlayer(self.game.to_move()));
        }
        self.advance(pos)
    }

    /// Applies the move computed by the AI.
    ///
    /// # Errors
    ///
    /// Passes through the engine's refusals.
    #[instrument(skip(self))]
    pub fn apply_ai_move(&mut self, pos: Position) -> Result<(), MoveError> {
        self.advance(pos)
    }

    fn advance(&mut self, pos: Position) -> Result<(), MoveError> {
        let next = self.game.play(pos)?;
        self.game = next;
        self.cursor = pos;

        if let Some(outcome) = self.game.outcome() {
            self.finish(outcome);
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "Game over");
        self.scoreboard.record(&outcome);
        self.show_result = true;
    }

    /// Restarts the game, keeping scores.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = self.game.restart();
        self.cursor = Position::Center;
        self.show_result = false;
    }

    /// Clears the scoreboard and restarts.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
        self.restart();
    }

    /// Switches mode and restarts.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        info!(mode = %self.mode, "Mode changed");
        self.restart();
    }

    /// Handles a command. Returns `false` when the app should quit.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::Restart => self.restart(),
            Command::ResetScores => self.reset_scores(),
            Command::ToggleMode => self.toggle_mode(),
            Command::Select if self.show_result => self.restart(),
            _ if self.show_result => {}
            Command::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Command::Select => self.try_place(self.cursor),
            Command::Place(pos) => {
                self.cursor = pos;
                self.try_place(pos);
            }
        }
        true
    }

    fn try_place(&mut self, pos: Position) {
        if let Err(e) = self.place_human(pos) {
            warn!(error = %e, ?pos, "Move refused");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_alternates() {
        let mut app = App::new(GameMode::TwoPlayer, Player::O);
        app.place_human(Position::Center).unwrap();
        assert_eq!(app.status_text(), "Player O's Turn");
        app.place_human(Position::TopLeft).unwrap();
        assert_eq!(app.status_text(), "Player X's Turn");
        assert!(!app.is_ai_turn());
    }

    #[test]
    fn test_human_refused_on_ai_turn() {
        let mut app = App::new(GameMode::VsAi, Player::O);
        app.place_human(Position::TopLeft).unwrap();
        assert!(app.is_ai_turn());
        assert_eq!(app.status_text(), "AI is thinking...");

        let before = app.game().clone();
        assert_eq!(
            app.place_human(Position::Center),
            Err(MoveError::WrongPlayer(Player::O))
        );
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_ai_as_x_moves_first() {
        let app = App::new(GameMode::VsAi, Player::X);
        assert!(app.is_ai_turn());
    }

    #[test]
    fn test_win_recorded_and_dialog_shown() {
        let mut app = App::new(GameMode::TwoPlayer, Player::O);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            app.place_human(pos).unwrap();
        }

        assert!(*app.show_result());
        assert_eq!(app.result_text().as_deref(), Some("Player X Wins!"));
        assert_eq!(app.scoreboard().wins(Player::X), 1);

        // Enter on the dialog plays again.
        assert!(app.handle(Command::Select));
        assert!(!*app.show_result());
        assert_eq!(app.game(), &Game::new());
        assert_eq!(app.scoreboard().wins(Player::X), 1);
    }

    #[test]
    fn test_ai_win_is_labelled() {
        let mut app = App::new(GameMode::VsAi, Player::O);
        for (pos, by_ai) in [
            (Position::TopLeft, false),
            (Position::Center, true),
            (Position::TopCenter, false),
            (Position::TopRight, true),
            (Position::MiddleLeft, false),
            (Position::BottomLeft, true),
        ] {
            if by_ai {
                app.apply_ai_move(pos).unwrap();
            } else {
                app.place_human(pos).unwrap();
            }
        }
        assert_eq!(app.status_text(), "AI Wins!");
        assert_eq!(*app.scoreboard().o_wins(), 1);
    }

    #[test]
    fn test_mode_toggle_keeps_scores() {
        let mut app = App::new(GameMode::TwoPlayer, Player::O);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            app.place_human(pos).unwrap();
        }
        app.handle(Command::ToggleMode);
        assert_eq!(*app.mode(), GameMode::VsAi);
        assert_eq!(app.scoreboard().total(), 1);
        assert_eq!(app.game(), &Game::new());

        app.handle(Command::ResetScores);
        assert_eq!(app.scoreboard().total(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(GameMode::TwoPlayer, Player::O);
        assert!(!app.handle(Command::Quit));
    }
}
