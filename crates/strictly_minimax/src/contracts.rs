//! Contract-based validation for tic-tac-toe.
//!
//! Preconditions guard the operations that only make sense on one side
//! of the game's end: scoring needs a finished board, choosing a move
//! needs an unfinished one.

use crate::rules::terminal;
use crate::{Board, Player};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// A precondition of a board operation was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ContractError {
    /// The operation needs a finished game.
    #[display("Board is not terminal")]
    NotTerminal,

    /// The operation needs a game still in progress.
    #[display("Game is already over")]
    GameOver,
}

/// Precondition: the game is over.
pub struct BoardIsTerminal;

impl BoardIsTerminal {
    /// Fails with [`ContractError::NotTerminal`] while moves remain.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), ContractError> {
        if terminal(board) {
            Ok(())
        } else {
            warn!("Board is still in progress");
            Err(ContractError::NotTerminal)
        }
    }
}

/// Precondition: the game is still in progress.
pub struct BoardInProgress;

impl BoardInProgress {
    /// Fails with [`ContractError::GameOver`] on a won or full board.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), ContractError> {
        if terminal(board) {
            warn!("Board is already terminal");
            Err(ContractError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Invariant: X has either as many marks as O, or exactly one more.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the mark counts of `board`.
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_precondition() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(BoardIsTerminal::check(&won), Ok(()));
        assert_eq!(
            BoardIsTerminal::check(&Board::new()),
            Err(ContractError::NotTerminal)
        );
    }

    #[test]
    fn test_in_progress_precondition() {
        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(BoardInProgress::check(&drawn), Err(ContractError::GameOver));
        assert_eq!(BoardInProgress::check(&Board::new()), Ok(()));
    }

    #[test]
    fn test_board_consistency() {
        assert!(BoardConsistent::holds(&Board::new()));
        assert!(BoardConsistent::holds(&"X../.../...".parse().unwrap()));
        assert!(BoardConsistent::holds(&"XO./.../...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"O../.../...".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"XX./.../...".parse().unwrap()));
    }
}
