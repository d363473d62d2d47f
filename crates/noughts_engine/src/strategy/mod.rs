//! Move selection strategies for the computer opponent.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::board::{Board, Mark};
use crate::config::Difficulty;

/// A move selection policy.
///
/// Implementations never leave observable mutation on the caller's
/// board: any look-ahead happens on a scratch copy or is rolled back
/// before returning. Each call is a self-contained, synchronous
/// computation.
pub trait Strategy: std::fmt::Debug {
    /// Selects a cell index for `ai` to play.
    ///
    /// Returns `None` only when the board has no empty cell; the match
    /// session never invokes a strategy on a terminal board.
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Option<usize>;

    /// The strategy's display name.
    fn name(&self) -> &'static str;
}

impl Difficulty {
    /// Builds the strategy for this difficulty tier.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Medium => Box::new(HeuristicStrategy::new()),
            Difficulty::Hard => Box::new(MinimaxStrategy::new()),
        }
    }
}
