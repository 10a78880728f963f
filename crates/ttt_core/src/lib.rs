pub mod board;
pub mod error;
pub mod lines;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use lines::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all tic-tac-toe engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen cell (None if the position is terminal or full)
    pub best_move: Option<u8>,
    /// Game-theoretic value of the position from O's perspective:
    /// +1 if O wins, -1 if X wins, 0 for a tie
    pub score: i32,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all tic-tac-toe engines must implement.
///
/// This allows the match runner to drive any opponent: the exhaustive
/// minimax engine, the random baseline, or anything else.
pub trait Engine: Send {
    /// Pick a move for the side to move on `board`.
    ///
    /// # Returns
    /// SearchResult containing the chosen cell, score, and statistics.
    /// `best_move` is `None` when the position admits no move.
    fn search(&mut self, board: &Board) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
