//! Test suite for the board state model
//! Validates mathematical invariants and game rules over the full state space

use std::collections::{HashSet, VecDeque};

use oxo::{Board, Cell, Player};

fn for_each_reachable_board(mut visit: impl FnMut(&Board)) {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    queue.push_back(Board::new());
    visited.insert(Board::new().encode());

    while let Some(board) = queue.pop_front() {
        visit(&board);

        if board.is_terminal() {
            continue;
        }

        for action in board.actions() {
            let next = board.apply(action).unwrap();
            if visited.insert(next.encode()) {
                queue.push_back(next);
            }
        }
    }
}

#[test]
fn action_count_always_matches_empty_cells() {
    for_each_reachable_board(|board| {
        let empty = board
            .cells()
            .iter()
            .filter(|&&c| c == Cell::Empty)
            .count();
        assert_eq!(board.actions().len(), empty);
        assert_eq!(board.actions().len(), 9 - board.occupied_count());
    });
}

#[test]
fn apply_changes_exactly_one_cell_with_the_movers_mark() {
    for_each_reachable_board(|board| {
        if board.is_terminal() {
            return;
        }

        let mover = board.to_move();
        for action in board.actions() {
            let next = board.apply(action).unwrap();
            let changed: Vec<usize> = (0..9)
                .filter(|&i| board.cells()[i] != next.cells()[i])
                .collect();
            assert_eq!(changed.len(), 1);
            assert_eq!(next.cells()[changed[0]], mover.to_cell());
        }
    });
}

#[test]
fn mark_counts_never_differ_by_more_than_one() {
    for_each_reachable_board(|board| {
        let (x, o) = board.mark_counts();
        assert!(x == o || x == o + 1, "unreachable counts on {}", board.encode());
        assert!(board.is_valid(), "reachable board {} must be valid", board.encode());
    });
}

#[test]
fn reachable_state_count_matches_the_known_figure() {
    assert_eq!(Board::count_reachable_states(), 5478);
}

#[test]
fn canonical_classes_under_d4_match_the_known_figure() {
    let mut canonical = HashSet::new();
    for_each_reachable_board(|board| {
        canonical.insert(board.canonical().encode());
    });
    assert_eq!(canonical.len(), 765);
}

#[test]
fn winners_are_unique_on_reachable_boards() {
    for_each_reachable_board(|board| {
        assert!(
            !(board.has_won(Player::X) && board.has_won(Player::O)),
            "both players have a line on {}",
            board.encode()
        );
    });
}

#[test]
fn terminal_boards_have_an_outcome_and_live_boards_do_not() {
    for_each_reachable_board(|board| {
        assert_eq!(board.outcome().is_ok(), board.is_terminal());
    });
}
