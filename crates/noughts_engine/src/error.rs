//! Error types for move submission.

use crate::board::Mark;

/// Error that can occur when validating or applying a move.
///
/// Occupied cells and finished games are normal control flow for a
/// host UI (ignore the click), not fatal conditions. `InvalidIndex`
/// is a programmer error: a correctly bounded UI never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0..9.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl std::error::Error for MoveError {}
