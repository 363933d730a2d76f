//! Core domain types for tic-tac-toe.

use crate::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
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
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every transition builds a new board and
/// leaves the previous one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 3]; 3],
        }
    }

    /// Gets the square at the given action's coordinates.
    ///
    /// Returns `None` when the coordinates fall outside the grid.
    pub fn get(&self, action: Action) -> Option<Square> {
        self.squares
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    /// Checks if the square at `action` exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares, row by row.
    pub fn squares(&self) -> &[[Square; 3]; 3] {
        &self.squares
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns a copy of the board with `player` marked at `action`.
    ///
    /// Callers guarantee `action` is in range and empty.
    pub(crate) fn with_mark(mut self, action: Action, player: Player) -> Self {
        self.squares[action.row][action.col] = Square::Occupied(player);
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => '.',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{}", symbol)?;
                if c < 2 {
                    write!(f, "|")?;
                }
            }
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty cell, nor a separator.
    #[display("Invalid board cell {:?}", ch)]
    InvalidCell {
        /// The offending character.
        ch: char,
    },
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 board cells, found {}", count)]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` are marks, `.` is an empty cell. Whitespace and the
    /// separators `/`, `|`, `-`, `+` are ignored, so the `Display`
    /// output parses back to the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Square::Occupied(Player::X)),
                'O' | 'o' => cells.push(Square::Occupied(Player::O)),
                '.' => cells.push(Square::Empty),
                '/' | '|' | '-' | '+' => {}
                c if c.is_whitespace() => {}
                c => return Err(BoardParseError::InvalidCell { ch: c }),
            }
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount { count: cells.len() });
        }

        let mut board = Board::new();
        for (i, square) in cells.into_iter().enumerate() {
            board.squares[i / 3][i % 3] = square;
        }
        Ok(board)
    }
}

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// X owns a complete line.
    XWins,
    /// O owns a complete line.
    OWins,
    /// Board is full with no complete line.
    Draw,
    /// Game still in progress.
    InProgress,
}

impl Outcome {
    /// Numeric score from X's point of view.
    ///
    /// `InProgress` maps to 0 like a draw. Use [`crate::utility`] when the
    /// board is required to be finished.
    pub fn utility(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw | Outcome::InProgress => 0,
        }
    }

    /// Builds the winning outcome for `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }
}
