//! First-class action type for tic-tac-toe.
//!
//! An action names a cell by its coordinates. It only carries meaning
//! relative to a particular board, which decides whether it is legal.

use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A cell coordinate: `row` and `col`, each expected in `0..=2`.
///
/// Actions order row-major (row first, then column). Search relies on
/// this order to break ties between equally good moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    new,
)]
#[display("({}, {})", row, col)]
pub struct Action {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Action {
    /// Whether both coordinates fall inside the 3x3 grid.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..3).flat_map(|row| (0..3).map(move |col| Action::new(row, col)))
    }
}

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidActionError {
    /// Row or column lies outside `0..=2`.
    #[display("Action {} is outside the board", action)]
    OutOfRange {
        /// The rejected action.
        action: Action,
    },

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", action)]
    Occupied {
        /// The rejected action.
        action: Action,
    },
}

impl InvalidActionError {
    /// Returns the action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            InvalidActionError::OutOfRange { action } | InvalidActionError::Occupied { action } => {
                *action
            }
        }
    }
}
