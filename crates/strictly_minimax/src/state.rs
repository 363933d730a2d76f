//! State model: whose turn it is, which moves exist, and what they produce.

use crate::rules::terminal;
use crate::{Action, Board, InvalidActionError, Player, Square};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the starting board: every square empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves when both players have the same number of marks, O when X
/// is ahead. The answer on a finished board carries no meaning.
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty square, or nothing once the game is over.
///
/// The set iterates in row-major order.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    if terminal(board) {
        return BTreeSet::new();
    }

    Action::all().filter(|a| board.is_empty(*a)).collect()
}

/// Returns the board produced by the player to move marking `action`.
///
/// The input board is left as it was.
///
/// # Errors
///
/// Returns [`InvalidActionError::OutOfRange`] when either coordinate is
/// outside `0..=2`, and [`InvalidActionError::Occupied`] when the square
/// already holds a mark.
#[instrument(skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    match board.get(action) {
        None => Err(InvalidActionError::OutOfRange { action }),
        Some(Square::Occupied(_)) => Err(InvalidActionError::Occupied { action }),
        Some(Square::Empty) => Ok(board.with_mark(action, player(board))),
    }
}
