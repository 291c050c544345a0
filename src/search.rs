//! Minimax move selection with alpha-beta pruning
//!
//! X maximizes the terminal score and O minimizes it. The game tree is at
//! most nine plies deep, so the search always runs to the bottom; the
//! pruning window and the early cut on an already-decided value keep the
//! visited node count small. No heuristic evaluation, no transposition
//! table: the tree is cheap enough to enumerate on every call.

use crate::board::{Action, Board, Player};

/// Search role for one ply.
///
/// The maximizing and minimizing halves of the search differ only in
/// comparison direction and which side of the pruning window they tighten,
/// so both run through the same [`search`] body parameterized by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    fn for_player(player: Player) -> Self {
        match player {
            Player::X => Role::Maximizing,
            Player::O => Role::Minimizing,
        }
    }

    fn flip(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }

    /// Starting value that any explored child improves on
    fn start(self) -> i32 {
        match self {
            Role::Maximizing => i32::MIN,
            Role::Minimizing => i32::MAX,
        }
    }

    /// The best score this role can ever reach
    fn ideal(self) -> i32 {
        match self {
            Role::Maximizing => 1,
            Role::Minimizing => -1,
        }
    }

    fn improves(self, candidate: i32, best: i32) -> bool {
        match self {
            Role::Maximizing => candidate > best,
            Role::Minimizing => candidate < best,
        }
    }
}

/// Returns the optimal action for the player to move, or `None` when the
/// game is already over.
///
/// Among equally good actions the first one in the board's row-major action
/// order wins; later moves of equal value never replace it. The caller's
/// board is left untouched, the whole search runs on freshly derived board
/// values.
pub fn best_action(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let role = Role::for_player(board.to_move());
    let (_, action) = search(board, role, i32::MIN, i32::MAX);
    action
}

/// One search step, shared by both roles so the pruning logic cannot drift
/// between the maximizing and minimizing variants.
///
/// Returns the value of the position together with the action achieving it
/// (`None` on terminal positions). The early return on an ideal value fires
/// before the window update for that branch; a known winning move is taken
/// without looking at its siblings.
fn search(board: &Board, role: Role, mut alpha: i32, mut beta: i32) -> (i32, Option<Action>) {
    if board.is_terminal() {
        let outcome = board.outcome().expect("terminal board has an outcome");
        return (outcome.score(), None);
    }

    let mut best = role.start();
    let mut chosen = None;

    for action in board.actions() {
        let child = board
            .apply(action)
            .expect("actions() only yields empty in-bounds cells");
        let (value, _) = search(&child, role.flip(), alpha, beta);

        if role.improves(value, best) {
            best = value;
            chosen = Some(action);
            if best == role.ideal() {
                return (best, chosen);
            }
        }

        match role {
            Role::Maximizing => {
                alpha = alpha.max(best);
                if best >= beta {
                    break;
                }
            }
            Role::Minimizing => {
                beta = beta.min(best);
                if best <= alpha {
                    break;
                }
            }
        }
    }

    (best, chosen)
}
