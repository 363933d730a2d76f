//! Scoring of finished boards.

use super::draw::is_full;
use super::win::winner;
use crate::contracts::{BoardIsTerminal, ContractError};
use crate::{Board, Outcome};
use tracing::instrument;

/// Classifies the board as won, drawn, or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::won_by(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Score of a finished board: `1` if X won, `-1` if O won, `0` for a draw.
///
/// # Errors
///
/// Returns [`ContractError::NotTerminal`] if the game is not over yet.
/// An unfinished board has no score; [`Outcome::utility`] is the total
/// variant that maps it to 0.
#[instrument(skip(board))]
pub fn utility(board: &Board) -> Result<i8, ContractError> {
    BoardIsTerminal::check(board)?;
    Ok(outcome(board).utility())
}
