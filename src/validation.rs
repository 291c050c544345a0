//! Board state validation logic

use std::collections::HashSet;

use crate::board::{Board, Player};
use crate::lines::WINNING_LINES;

impl Board {
    /// Check if the board state could occur in a real game.
    ///
    /// [`Board::from_cells`] accepts anything, so this is the gate for
    /// externally constructed positions.
    pub fn is_valid(&self) -> bool {
        let (x_count, o_count) = self.mark_counts();

        // X opens, so the counts are equal or X is ahead by exactly one
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // Whoever won must have moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && o_count != x_count {
            return false;
        }

        // Multiple winning lines are only possible when completed by a
        // single move, so they must share a cell
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let target = player.to_cell();
        let completed: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == target))
            .collect();

        if completed.len() < 2 {
            return true;
        }

        (0..9).any(|idx| completed.iter().all(|line| line.contains(&idx)))
    }

    /// Count distinct states reachable from the empty board
    pub fn count_reachable_states() -> usize {
        let mut seen = HashSet::new();
        let mut stack = vec![Board::new()];
        seen.insert(Board::new().encode());

        while let Some(state) = stack.pop() {
            if state.is_terminal() {
                continue;
            }

            for action in state.actions() {
                let Ok(next) = state.apply(action) else {
                    continue;
                };
                if seen.insert(next.encode()) {
                    stack.push(next);
                }
            }
        }

        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_reachable_states_are_valid() {
        let board = Board::from_string("XOX.X.O..").unwrap();
        assert!(board.is_valid());
        assert!(Board::new().is_valid());
    }

    #[test]
    fn test_unbalanced_counts_are_invalid() {
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn test_two_winners_are_invalid() {
        // XXX
        // OOO
        // X..
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::O,
            Cell::X,
            Cell::Empty,
            Cell::Empty,
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn test_winner_must_have_moved_last() {
        // X has a completed row but equal counts, meaning O moved after the
        // game ended
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::O,
            Cell::Empty,
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // XXX
        // XOO
        // XOO
        // Top row and left column share the corner: completed by one move
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::X,
            Cell::O,
            Cell::O,
        ]);
        assert!(board.is_valid());
    }

    #[test]
    fn test_disjoint_double_win_is_invalid() {
        // XXX
        // OO.
        // XXX
        // Two parallel rows cannot be finished by a single move
        let board = Board::from_cells([
            Cell::X,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::Empty,
            Cell::X,
            Cell::X,
            Cell::X,
        ]);
        assert!(!board.is_valid());
    }
}
