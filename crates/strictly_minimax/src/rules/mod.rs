//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine can compose them freely.

pub mod draw;
pub mod utility;
pub mod win;

pub use draw::{is_full, terminal};
pub use utility::{outcome, utility};
pub use win::winner;
