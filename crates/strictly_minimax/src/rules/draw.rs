//! Draw and end-of-game detection for tic-tac-toe.

use super::win::winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board
        .squares()
        .iter()
        .flatten()
        .all(|s| *s != Square::Empty)
}

/// Whether the game is over: somebody owns a line, or no empty square remains.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
