//! Exhaustive Minimax Engine
//!
//! Full-depth minimax search with no pruning and no depth limit: the
//! game tree is at most nine plies deep, so brute force is instant and
//! the resulting play is game-theoretically perfect.

mod eval;
mod search;

use ttt_core::{Board, Engine, SearchResult};

/// Engine that plays perfectly by searching the complete game tree.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(board, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(cell, _)| cell),
            score: result.map(|(_, s)| s).unwrap_or(0),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::utility;
pub use search::{best_move, pick_best_move};
