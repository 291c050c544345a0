//! Winning line analysis

use std::collections::HashSet;

use super::{Action, Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The player holding a completed line, if any.
    ///
    /// In a legally reached position at most one player can have a line, so
    /// the checking order does not matter.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        if Self::has_won(cells, Player::X) {
            Some(Player::X)
        } else if Self::has_won(cells, Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Find all actions that would immediately win for the player
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> HashSet<Action> {
        let mut moves = HashSet::new();
        for &line in &WINNING_LINES {
            if let Some(idx) = Self::winning_move_in_line(cells, player, &line) {
                moves.insert(Action::from_index(idx));
            }
        }
        moves
    }

    /// Check if a player has an immediate winning move (2 in a line with 1 empty)
    pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    /// Find the winning cell index in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_idx = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_idx.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_idx = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent mark in line
            }
        }

        if count == 2 { empty_idx } else { None }
    }
}
