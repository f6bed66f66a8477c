//! Interactive terminal session.

use crate::app::App;
use crate::config::GameConfig;
use crate::input;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_tictactoe::search;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the TUI until the user quits.
#[instrument(skip_all, fields(mode = %config.mode(), ai_player = %config.ai_player()))]
pub async fn run(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = or_restore(enter_terminal, restore_terminal)?;

    let mut app = App::new(*config.mode(), *config.ai_player());
    let res = event_loop(&mut terminal, &mut app, config.think_delay()).await;

    restore_terminal();
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.scoreboard(), "Session ended");
    res
}

fn enter_terminal() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort undo of raw mode and the alternate screen.
fn restore_terminal() {
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        error!(error = %err, "Failed to leave alternate screen");
    }
    if let Err(err) = disable_raw_mode() {
        error!(error = %err, "Failed to disable raw mode");
    }
}

/// Runs `setup`, calling `restore` before returning its error.
fn or_restore<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        restore();
    })
}

async fn event_loop(terminal: &mut Term, app: &mut App, think_delay: Duration) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Input is not read until the AI's move has landed.
        if app.is_ai_turn() {
            play_ai_turn(app, think_delay).await?;
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = input::command_for(key.code)
            && !app.handle(command)
        {
            info!("User quit");
            return Ok(());
        }
    }
}

/// Pauses for effect, then searches off the async runtime.
#[instrument(skip(app))]
async fn play_ai_turn(app: &mut App, think_delay: Duration) -> Result<()> {
    tokio::time::sleep(think_delay).await;

    let board = *app.game().board();
    let ai = *app.ai_player();
    let report = tokio::task::spawn_blocking(move || search(&board, ai, ai.opponent()))
        .await
        .context("AI search task failed")?
        .context("AI could not move")?;

    info!(position = %report.position, score = report.score, nodes = report.nodes, "AI moved");
    app.apply_ai_move(report.position)
        .context("AI produced an illegal move")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores() {
        let restored = Cell::new(false);
        let res: Result<()> = or_restore(|| anyhow::bail!("no tty"), || restored.set(true));
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_state() {
        let restored = Cell::new(false);
        let res = or_restore(|| Ok(7), || restored.set(true));
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }
}
