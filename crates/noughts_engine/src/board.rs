//! Core board types: marks, cells, and the 3x3 grid.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const NUM_CELLS: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X (goes first).
    X,
    /// O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order: rows 0-1-2, 3-4-5, 6-7-8.
/// The board validates occupancy only; turn legality belongs to
/// [`MatchSession`](crate::MatchSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Gets the cell at the given index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if the index is out of range.
    pub fn get(&self, index: usize) -> Result<Cell, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::InvalidIndex(index))
    }

    /// Places a mark at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if the index is out of range,
    /// or [`MoveError::CellOccupied`] if the cell is taken. The board is
    /// unchanged on either failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(index)? {
            Cell::Empty => {
                self.cells[index] = Cell::Occupied(mark);
                Ok(())
            }
            Cell::Occupied(_) => Err(MoveError::CellOccupied(index)),
        }
    }

    /// Places a mark at a known-empty index during strategy look-ahead.
    pub(crate) fn place_unchecked(&mut self, index: usize, mark: Mark) {
        debug_assert!(matches!(self.cells[index], Cell::Empty));
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Clears a cell, restoring look-ahead placements before returning.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Ok(Cell::Empty))
    }

    /// Returns the indices of all empty cells in ascending order.
    ///
    /// Recomputed on each call; the board mutates between calls.
    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.available_moves().next().is_none()
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based index so a host can prompt for it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
