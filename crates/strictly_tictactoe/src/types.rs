//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a player mark cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unknown player {:?} (expected X or O)", _0)]
pub struct PlayerParseError(pub String);

impl std::error::Error for PlayerParseError {}

impl FromStr for Player {
    type Err = PlayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(PlayerParseError(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: copying it is how the search explores
/// hypothetical positions without touching the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// No rules are checked here; see [`crate::apply_move`] for that.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Iterates over the empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based key so a human can type them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact one-line form, e.g. `XX.OO....`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The string did not describe exactly nine squares.
    #[display("Board must have exactly 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character was not a mark or an empty marker.
    #[display("Unexpected character {:?} at square {}", _0, _1)]
    InvalidChar(char, usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares: `X`/`O` (any case) for marks and `.`, `_`, `-`
    /// or a space for empty. Surrounding whitespace and `|` separators are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.trim().chars().filter(|c| *c != '|').collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (i, c) in cells.into_iter().enumerate() {
            squares[i] = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                other => return Err(BoardParseError::InvalidChar(other, i)),
            };
        }

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!(" O ".parse::<Player>(), Ok(Player::O));
        assert!("z".parse::<Player>().is_err());
    }

    #[test]
    fn test_board_parse_and_display() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "XX.OO....");
    }

    #[test]
    fn test_board_parse_with_separators() {
        let board: Board = "XO_|___|___".parse().unwrap();
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_board_parse_errors() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Z', 2))
        );
    }

    #[test]
    fn test_empty_positions_ascending() {
        let board: Board = "X...O...X".parse().unwrap();
        let empties: Vec<usize> = board.empty_positions().map(Position::to_index).collect();
        assert_eq!(empties, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X.......O".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
