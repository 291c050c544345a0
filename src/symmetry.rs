//! D4 symmetry group operations for board canonicalization

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Cell};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply transform to an action.
    ///
    /// Reflection (mirror across the vertical axis) is applied first, then
    /// the clockwise rotation.
    pub fn apply(&self, action: Action) -> Action {
        let (mut row, mut col) = (action.row, action.col);

        if self.reflection {
            col = 2 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let next_row = col;
            let next_col = 2 - row;
            row = next_row;
            col = next_col;
        }

        Action::new(row, col)
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // In reflect-then-rotate order every reflected transform is an
            // involution, so it is its own inverse.
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

impl Board {
    /// Apply a D4 transform to the board
    #[must_use = "transform returns a new board state; the original is unchanged"]
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; 9];
        for index in 0..9 {
            let target = t.apply(Action::from_index(index));
            cells[target.index()] = self.cells[index];
        }
        Board::from_cells(cells)
    }

    /// Get the canonical (lexicographically minimal encoding) form under D4
    /// symmetry. All eight orientations of a position share one canonical
    /// form.
    pub fn canonical(&self) -> Self {
        let mut best_state = *self;
        let mut best_encoding = self.encode();

        for transform in D4Transform::all() {
            let transformed = self.transform(&transform);
            let encoding = transformed.encode();
            if encoding < best_encoding {
                best_encoding = encoding;
                best_state = transformed;
            }
        }

        best_state
    }
}
