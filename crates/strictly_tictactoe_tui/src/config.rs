//! Game configuration: defaults, optional TOML file, CLI overrides.

use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting mode (two-player or vs-ai).
    mode: GameMode,

    /// Mark played by the AI in vs-ai mode.
    ai_player: Player,

    /// Pause before the AI moves, in milliseconds.
    think_delay_ms: u64,

    /// Where the interactive UI writes its logs.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_player: Player::O,
            think_delay_ms: 500,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, ai_player = %config.ai_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config for a session.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line values on top of the loaded settings.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        ai_player: Option<Player>,
        think_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(ai_player) = ai_player {
            self.ai_player = ai_player;
        }
        if let Some(ms) = think_delay_ms {
            self.think_delay_ms = ms;
        }
        self
    }

    /// The AI pause as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.mode(), GameMode::TwoPlayer);
        assert_eq!(*config.ai_player(), Player::O);
        assert_eq!(config.think_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(Some(GameMode::VsAi), None, Some(0));
        assert_eq!(*config.mode(), GameMode::VsAi);
        assert_eq!(*config.ai_player(), Player::O);
        assert_eq!(*config.think_delay_ms(), 0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str("ai_player = \"X\"").unwrap();
        assert_eq!(*config.ai_player(), Player::X);
        assert_eq!(*config.think_delay_ms(), 500);
    }
}
