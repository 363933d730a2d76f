//! Shared helpers for integration tests.

use std::collections::{HashSet, VecDeque};
use strictly_minimax::{Board, actions, initial_state, result};

/// Every board reachable from the empty board through legal play.
#[allow(dead_code)]
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let mut boards = Vec::new();

    seen.insert(initial_state());
    queue.push_back(initial_state());

    while let Some(board) = queue.pop_front() {
        boards.push(board);
        for action in actions(&board) {
            let next = result(&board, action).expect("generated action must apply");
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    boards
}

/// Parses a board literal, panicking on malformed test input.
#[allow(dead_code)]
pub fn board(text: &str) -> Board {
    text.parse().expect("valid board literal")
}
