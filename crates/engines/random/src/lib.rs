//! Random Move Engine
//!
//! A simple engine that selects a cell uniformly at random from all
//! empty cells. Useful for:
//! - Testing match infrastructure
//! - Baseline comparisons (a perfect engine must never lose to this)

use rand::seq::SliceRandom;
use rand::thread_rng;
use ttt_core::{Board, Engine, SearchResult};

#[cfg(test)]
mod lib_tests;

/// An engine that plays random legal moves.
///
/// It performs no evaluation - it simply picks a random empty cell. It's
/// the simplest possible opponent and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 1;

        let best_move = if board.outcome().is_terminal() {
            None
        } else {
            board.empty_cells().choose(&mut thread_rng()).copied()
        };

        SearchResult {
            best_move,
            score: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
