//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game mode - who is the opponent?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[default]
    TwoPlayer,
    /// Human against the minimax AI.
    VsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsAi => "vs AI",
        }
    }

    /// Switches to the other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsAi,
            GameMode::VsAi => GameMode::TwoPlayer,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
