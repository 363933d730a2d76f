//! Strictly Minimax - perfect tic-tac-toe play by exhaustive search
//!
//! The crate is a pure computation core. A presentation layer (CLI, GUI,
//! test harness) builds boards, asks whose turn it is, applies moves,
//! and asks the engine for the best reply.
//!
//! # Architecture
//!
//! - **State model**: [`initial_state`], [`player`], [`actions`], [`result`]
//! - **Rules**: [`winner`], [`terminal`], [`utility`], [`outcome`]
//! - **Search**: [`minimax`], [`solve`], [`max_value`], [`min_value`]
//!
//! Boards are `Copy` values. No operation mutates its input, and nothing
//! is shared between calls.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, initial_state, minimax, player, result, Player};
//!
//! let board = initial_state();
//! assert_eq!(player(&board), Player::X);
//!
//! let board = result(&board, Action::new(1, 1))?;
//! let reply = minimax(&board)?;
//! assert_eq!(reply, Action::new(0, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod rules;
mod search;
mod state;
mod types;

// Crate-level exports - Domain types
pub use action::{Action, InvalidActionError};
pub use types::{Board, BoardParseError, Outcome, Player, Square};

// Crate-level exports - State model
pub use state::{actions, initial_state, player, result};

// Crate-level exports - Rules
pub use rules::{is_full, outcome, terminal, utility, winner};

// Crate-level exports - Contracts
pub use contracts::{BoardConsistent, BoardInProgress, BoardIsTerminal, ContractError};

// Crate-level exports - Search
pub use search::{Solution, max_value, min_value, minimax, solve};
