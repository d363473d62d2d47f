//! Easy tier: uniformly random moves.

use super::Strategy;
use crate::board::{Board, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministically seeded strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, _ai: Mark, _opponent: Mark) -> Option<usize> {
        let available: Vec<usize> = board.available_moves().collect();
        if available.is_empty() {
            return None;
        }
        let index = available[self.rng.gen_range(0..available.len())];
        debug!(index, "Random strategy selected move");
        Some(index)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
