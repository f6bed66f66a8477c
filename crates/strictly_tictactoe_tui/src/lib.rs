//! Terminal front end for Strictly Tic-Tac-Toe.
//!
//! The core crate decides moves and outcomes; everything a player sees
//! lives here.
//!
//! # Architecture
//!
//! - **App**: mode, scoreboard, cursor and dialog state around a core `Game`
//! - **UI**: stateless ratatui rendering of an `App`
//! - **TUI**: the event loop, including the paced AI turn
//! - **Headless**: `best-move` and `self-play` commands
//! - **Config**: defaults, TOML file and CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod headless;
mod input;
mod mode;
mod scoreboard;
mod tui;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use headless::{BestMoveReport, best_move, self_play};
pub use input::{Command as InputCommand, Direction, command_for, move_cursor};
pub use mode::GameMode;
pub use scoreboard::Scoreboard;
pub use tui::run as run_tui;
pub use ui::draw;
