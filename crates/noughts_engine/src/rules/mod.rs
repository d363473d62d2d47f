//! Outcome evaluation: win lines, draw detection, and game status.

mod win;

pub use win::{LINES, Line, has_line, winning_line};

use crate::board::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Current status of the game, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win for the mark.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Resolves the terminal status of a board.
///
/// A board reached through legal move application can hold a completed
/// line for at most one mark; that invariant belongs to
/// [`MatchSession`](crate::MatchSession) and is not re-checked here.
pub fn status(board: &Board) -> GameStatus {
    if has_line(board, Mark::X) {
        GameStatus::Won(Mark::X)
    } else if has_line(board, Mark::O) {
        GameStatus::Won(Mark::O)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
