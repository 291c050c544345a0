//! Exhaustive minimax oracle without pruning
//!
//! Solves positions by full enumeration with memoization and records every
//! optimal move instead of a single choice. The pruning search in
//! [`crate::search`] is validated against this table in the test suite; it
//! is also the tool of choice when a caller wants the complete optimal-move
//! set rather than one deterministic pick.

use std::collections::HashMap;

use crate::board::{Action, Board, Player};

/// Game-theoretic value and the complete set of optimal moves for one state.
///
/// `optimal_moves` is in row-major order and empty for terminal states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalPolicy {
    pub value: i32,
    pub optimal_moves: Vec<Action>,
}

/// Solve a single position, reusing previously solved states from `memo`.
pub fn solve(board: &Board, memo: &mut HashMap<String, OptimalPolicy>) -> OptimalPolicy {
    let key = board.encode();
    if let Some(policy) = memo.get(&key) {
        return policy.clone();
    }

    if board.is_terminal() {
        let value = board
            .outcome()
            .expect("terminal board has an outcome")
            .score();
        let policy = OptimalPolicy {
            value,
            optimal_moves: Vec::new(),
        };
        memo.insert(key, policy.clone());
        return policy;
    }

    let to_move = board.to_move();
    let mut best_value = match to_move {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best_moves: Vec<Action> = Vec::new();

    for action in board.actions() {
        let next = board
            .apply(action)
            .expect("actions() only yields empty in-bounds cells");
        let child_value = solve(&next, memo).value;

        let improves = match to_move {
            Player::X => child_value > best_value,
            Player::O => child_value < best_value,
        };

        if improves {
            best_value = child_value;
            best_moves.clear();
            best_moves.push(action);
        } else if child_value == best_value {
            best_moves.push(action);
        }
    }

    let policy = OptimalPolicy {
        value: best_value,
        optimal_moves: best_moves,
    };
    memo.insert(key, policy.clone());
    policy
}

/// Solve every state reachable from the empty board.
///
/// The returned map is keyed by [`Board::encode`] and covers all 5,478
/// reachable positions.
pub fn solve_all() -> HashMap<String, OptimalPolicy> {
    let mut memo = HashMap::new();
    solve(&Board::new(), &mut memo);
    memo
}
