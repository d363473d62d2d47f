//! Hard tier: exhaustive minimax search with alpha-beta pruning.

use super::Strategy;
use crate::board::{Board, Mark};
use crate::rules;
use tracing::{debug, instrument};

/// Searches the full remaining game tree.
///
/// Wins are scored `10 - depth` and losses `depth - 10`, with depth
/// counted in plies from the current position, so the search prefers
/// faster wins and slower losses. The 3x3 tree is always tractable;
/// no deepening or time limit is needed.
#[derive(Debug, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Creates the strategy. Stateless; every call searches fresh.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, ai: Mark, opponent: Mark) -> Option<usize> {
        let mut scratch = board.clone();
        let mut best_score = i32::MIN;
        let mut best_index = None;

        // Candidates in ascending order; ties break first-found.
        for index in board.available_moves() {
            scratch.place_unchecked(index, ai);
            let score = search(&mut scratch, ai, opponent, false, 0, i32::MIN, i32::MAX);
            scratch.clear(index);
            if score > best_score {
                best_score = score;
                best_index = Some(index);
            }
        }

        debug!(?best_index, best_score, "Minimax strategy selected move");
        best_index
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Depth-first alpha-beta search with strict restore-on-return: every
/// placement on the scratch board is cleared before the frame exits.
fn search(
    board: &mut Board,
    ai: Mark,
    opponent: Mark,
    maximizing: bool,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if rules::has_line(board, ai) {
        return 10 - depth;
    }
    if rules::has_line(board, opponent) {
        return depth - 10;
    }
    if board.is_full() {
        return 0;
    }

    let candidates: Vec<usize> = board.available_moves().collect();
    if maximizing {
        let mut best = i32::MIN;
        for index in candidates {
            board.place_unchecked(index, ai);
            let score = search(board, ai, opponent, false, depth + 1, alpha, beta);
            board.clear(index);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in candidates {
            board.place_unchecked(index, opponent);
            let score = search(board, ai, opponent, true, depth + 1, alpha, beta);
            board.clear(index);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
