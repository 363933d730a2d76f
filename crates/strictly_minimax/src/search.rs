//! Exhaustive minimax search.
//!
//! Every call walks the full game tree below the given board. Values are
//! scored from X's point of view: X maximizes, O minimizes. Nothing is
//! cached between calls, so independent searches can run on separate
//! threads without coordination.

use crate::contracts::{BoardConsistent, BoardInProgress, ContractError};
use crate::rules::{outcome, terminal};
use crate::state::{actions, player};
use crate::{Action, Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The move chosen for the player to move, with its game value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Solution {
    /// Best action, lowest in row-major order among equally good ones.
    action: Action,
    /// Game value after `action` under optimal play (`-1..=1`).
    value: i8,
    /// Positions evaluated below the root.
    nodes: u64,
}

/// Depth-first walker that counts the positions it evaluates.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn max_value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return outcome(board).utility();
        }

        let to_move = player(board);
        let mut value = i8::MIN;
        for action in actions(board) {
            value = value.max(self.min_value(&board.with_mark(action, to_move)));
        }
        value
    }

    fn min_value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if terminal(board) {
            return outcome(board).utility();
        }

        let to_move = player(board);
        let mut value = i8::MAX;
        for action in actions(board) {
            value = value.min(self.max_value(&board.with_mark(action, to_move)));
        }
        value
    }
}

/// Value of `board` when X is to move and both sides play perfectly.
///
/// A finished board scores its utility.
pub fn max_value(board: &Board) -> i8 {
    Search::default().max_value(board)
}

/// Value of `board` when O is to move and both sides play perfectly.
///
/// A finished board scores its utility.
pub fn min_value(board: &Board) -> i8 {
    Search::default().min_value(board)
}

/// Searches the full tree below `board` for the best move of the player to move.
///
/// X takes the action whose reply value is highest, O the lowest. Actions
/// are tried in row-major order and a later one only replaces the current
/// best when strictly better, so ties resolve to the first cell.
///
/// # Errors
///
/// Returns [`ContractError::GameOver`] if the board is already won or full.
#[instrument(skip(board))]
pub fn solve(board: &Board) -> Result<Solution, ContractError> {
    BoardInProgress::check(board)?;
    debug_assert!(BoardConsistent::holds(board), "Board consistency violated");

    let to_move = player(board);
    let mut search = Search::default();
    let mut best: Option<(Action, i8)> = None;

    for action in actions(board) {
        let next = board.with_mark(action, to_move);
        let value = match to_move {
            Player::X => search.min_value(&next),
            Player::O => search.max_value(&next),
        };

        let improves = match best {
            None => true,
            Some((_, best_value)) => match to_move {
                Player::X => value > best_value,
                Player::O => value < best_value,
            },
        };
        if improves {
            best = Some((action, value));
        }
    }

    let (action, value) = best.ok_or(ContractError::GameOver)?;
    debug!(
        player = %to_move,
        action = %action,
        value,
        nodes = search.nodes,
        "Search complete"
    );

    Ok(Solution {
        action,
        value,
        nodes: search.nodes,
    })
}

/// Returns the optimal action for the player to move.
///
/// Same as [`solve`], keeping only the action.
///
/// # Errors
///
/// Returns [`ContractError::GameOver`] if the board is already won or full.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Result<Action, ContractError> {
    solve(board).map(|solution| solution.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_board_values() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(max_value(&won), 1);
        assert_eq!(min_value(&won), 1);

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(max_value(&drawn), 0);
        assert_eq!(min_value(&drawn), 0);
    }

    #[test]
    fn test_one_move_left() {
        // X to move, only (2, 2) is open and it completes the diagonal.
        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        assert_eq!(max_value(&board), 1);
        assert_eq!(minimax(&board), Ok(Action::new(2, 2)));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let solution = solve(&board).unwrap();
        assert_eq!(*solution.action(), Action::new(0, 2));
        assert_eq!(*solution.value(), 1);
    }

    #[test]
    fn test_blocks_threat() {
        let board: Board = "XX./.O./...".parse().unwrap();
        let solution = solve(&board).unwrap();
        assert_eq!(*solution.action(), Action::new(0, 2));
        assert_eq!(*solution.value(), 0);
    }

    #[test]
    fn test_ties_resolve_row_major() {
        // O has lost; every reply scores 1, so the first empty cell wins the tie.
        let board: Board = "XO./.X./...".parse().unwrap();
        let solution = solve(&board).unwrap();
        assert_eq!(*solution.value(), 1);
        assert_eq!(*solution.action(), Action::new(0, 2));
    }

    #[test]
    fn test_rejects_finished_board() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(minimax(&won), Err(ContractError::GameOver));
        assert_eq!(solve(&won), Err(ContractError::GameOver));
    }
}
