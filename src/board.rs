//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move target, addressed by 0-indexed row and column.
///
/// An action is only meaningful relative to the board it was enumerated
/// from; [`Board::apply`] revalidates it against the board it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Row-major cell index. Only meaningful when the action is in bounds.
    pub(crate) fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Signed score from X's perspective: +1 for an X win, -1 for an O win,
    /// 0 for a draw.
    pub fn score(self) -> i32 {
        match self {
            Outcome::Win(Player::X) => 1,
            Outcome::Win(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

/// A 3x3 board of cells.
///
/// This type implements `Copy` since it is only 9 bytes, so every transition
/// hands back a fresh value and the caller's board is never touched. Whose
/// turn it is is not stored; it is derived from the mark counts, so two
/// boards with the same cells are the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board directly from cells, without reachability checks.
    ///
    /// Useful for constructing test positions; [`Board::is_valid`] reports
    /// whether the result could occur in a real game.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Whitespace is filtered out, so multi-line layouts are accepted.
    /// `.` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The mark counts could not occur in a game (X opens, so the counts
    ///   must be equal or X ahead by exactly 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = board.mark_counts();
        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(crate::Error::InvalidMarkCounts { x_count, o_count });
        }

        Ok(board)
    }

    /// Get the cells as a flat row-major array
    pub fn cells(&self) -> [Cell; 9] {
        self.cells
    }

    /// Get the cell at (row, col), or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        let action = Action::new(row, col);
        action.in_bounds().then(|| self.cells[action.index()])
    }

    /// Check if the cell targeted by an in-bounds action is empty
    pub fn is_empty(&self, action: Action) -> bool {
        action.in_bounds() && self.cells[action.index()] == Cell::Empty
    }

    /// Count X and O marks on the board
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for cell in &self.cells {
            match cell {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
        (x, o)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let (x, o) = self.mark_counts();
        x + o
    }

    /// The player whose turn it is, derived from the mark counts.
    ///
    /// X opens, so O is to move exactly when X has placed strictly more
    /// marks. Total on every board; on a terminal board the result carries
    /// no meaning, callers check terminality first where that matters.
    pub fn to_move(&self) -> Player {
        let (x, o) = self.mark_counts();
        if x > o { Player::O } else { Player::X }
    }

    /// All empty cells as actions, in row-major order.
    ///
    /// The order is part of the contract: the search iterates actions in
    /// exactly this order, which makes its tie-breaking reproducible.
    pub fn actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Place the active player's mark and return the new board state.
    ///
    /// The input board is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the action's coordinates
    /// exceed the grid, and [`crate::Error::Occupied`] if the target cell
    /// already holds a mark.
    #[must_use = "apply returns a new board state; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        if !action.in_bounds() {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
            });
        }

        if self.cells[action.index()] != Cell::Empty {
            return Err(crate::Error::Occupied {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.index()] = self.to_move().to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the player holding a completed line, if any
    pub fn winning_line(&self) -> Option<Player> {
        super::lines::LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winning_line().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winning_line().is_none()
    }

    /// The outcome of a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameInProgress`] when called on a board that
    /// is not terminal; asking for the outcome of a live game is a logic
    /// error at the call site.
    pub fn outcome(&self) -> Result<Outcome, crate::Error> {
        if let Some(winner) = self.winning_line() {
            Ok(Outcome::Win(winner))
        } else if !self.cells.contains(&Cell::Empty) {
            Ok(Outcome::Draw)
        } else {
            Err(crate::Error::GameInProgress)
        }
    }

    /// Get a compact string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
