//! Medium tier: win if possible, block if necessary, otherwise random.

use super::{RandomStrategy, Strategy};
use crate::board::{Board, Mark};
use crate::rules;
use tracing::{debug, instrument};

/// Two-ply greedy heuristic.
///
/// Checks its own winning moves first, then the opponent's, then falls
/// back to a random move. Deeper traps (double threats set up two plies
/// ahead) beat it; that is the tier's intended ceiling, not a defect.
#[derive(Debug)]
pub struct HeuristicStrategy {
    fallback: RandomStrategy,
}

impl HeuristicStrategy {
    /// Creates a strategy with an entropy-seeded random fallback.
    pub fn new() -> Self {
        Self {
            fallback: RandomStrategy::new(),
        }
    }

    /// Creates a strategy with a deterministically seeded fallback.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: RandomStrategy::seeded(seed),
        }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Option<usize> {
        // A winning move takes absolute priority over a block.
        if let Some(index) = completing_move(board, ai) {
            debug!(index, "Heuristic strategy takes the win");
            return Some(index);
        }

        if let Some(index) = completing_move(board, opponent) {
            debug!(index, "Heuristic strategy blocks the opponent");
            return Some(index);
        }

        self.fallback.select_move(board, ai, opponent)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Returns the first cell (ascending) that would complete a line for
/// the mark, hypothetically placing and rolling back each candidate.
fn completing_move(board: &Board, mark: Mark) -> Option<usize> {
    let mut scratch = board.clone();
    for index in board.available_moves() {
        scratch.place_unchecked(index, mark);
        let completes = rules::has_line(&scratch, mark);
        scratch.clear(index);
        if completes {
            return Some(index);
        }
    }
    None
}
