//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Player, Square};

/// The eight lines, checked rows first, then columns, then diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first complete line,
/// `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(Action::new(a.0, a.1));
        if let Some(Square::Occupied(player)) = sq
            && sq == board.get(Action::new(b.0, b.1))
            && sq == board.get(Action::new(c.0, c.1))
        {
            return Some(player);
        }
    }

    None
}
