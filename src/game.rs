//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Outcome, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A complete game with history.
///
/// The board itself is not stored; every query replays the move list from
/// the empty board, so the record is the single source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
}

impl Game {
    /// Create a new game at the empty board
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game has already finished,
    /// and passes through the action errors of [`Board::apply`].
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.apply(action)?;

        self.moves.push(Move {
            action,
            player: current.to_move(),
        });

        if next.is_terminal() {
            self.outcome = Some(next.outcome()?);
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive).
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// is applied to. This indicates corrupted game data.
    fn replay_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut state = Board::new();
        for m in self.moves.iter().take(end_index) {
            state = state.apply(m.action)?;
        }
        Ok(state)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if the move history is corrupted.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_until(self.moves.len())
    }

    /// Get the sequence of board states, starting at the empty board
    ///
    /// # Errors
    ///
    /// Returns error if the move history is corrupted.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
