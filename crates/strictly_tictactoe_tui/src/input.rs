//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Arrow direction for the board cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Place a mark under the cursor (or dismiss the result dialog).
    Select,
    /// Place a mark at a specific square.
    Place(Position),
    /// Start a new game, keeping scores.
    Restart,
    /// Clear the scoreboard and start a new game.
    ResetScores,
    /// Switch between two-player and vs-AI.
    ToggleMode,
    /// Leave the app.
    Quit,
}

/// Maps a key to a command.
///
/// Digits 1-9 address squares left-to-right, top-to-bottom.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Command::Place)
        }
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('s') => Some(Command::ResetScores),
        KeyCode::Char('m') => Some(Command::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor one square, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
