//! Exhaustive minimax search over the full game tree

use ttt_core::{Board, GameError, Mark};

use crate::eval::utility;

/// Searches the position and returns the best cell with its value.
///
/// O is the maximizing side and X the minimizing side; the value is the
/// fixed-perspective utility from `eval`. Among equally good cells the
/// lowest index is kept: only a strict improvement replaces the current
/// best, so the first cell reaching the final score wins ties.
///
/// # Arguments
/// * `board` - The position to search
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` if the position is terminal or has no empty cell, otherwise
/// the chosen cell and the game-theoretic value of the position.
pub fn pick_best_move(board: &Board, nodes: &mut u64) -> Option<(u8, i32)> {
    if board.outcome().is_terminal() {
        return None;
    }

    let mut tmp = *board;
    let mut cells = Vec::with_capacity(9);
    tmp.empty_cells_into(&mut cells);
    if cells.is_empty() {
        return None;
    }

    let maximizing = tmp.side_to_move == Mark::O;
    let mut best = cells[0];
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for cell in cells {
        tmp.make_move(cell);
        *nodes += 1;
        let score = minimax(&mut tmp, !maximizing, nodes);
        tmp.unmake_move(cell);

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best = cell;
        }
    }

    Some((best, best_score))
}

/// Recursive minimax with no pruning.
///
/// The board buffer is mutated in place and restored on every return
/// path, so siblings always see the position they were enumerated from.
/// Depth is bounded by the nine cells; no explicit cutoff is needed.
fn minimax(board: &mut Board, maximizing: bool, nodes: &mut u64) -> i32 {
    if let Some(value) = utility(board.outcome()) {
        return value;
    }

    let mut cells = Vec::with_capacity(9);
    board.empty_cells_into(&mut cells);

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for cell in cells {
        board.make_move(cell);
        *nodes += 1;
        let score = minimax(board, !maximizing, nodes);
        board.unmake_move(cell);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Best cell for the side to move, failing when no move can be made.
pub fn best_move(board: &Board) -> Result<u8, GameError> {
    let mut nodes = 0;
    match pick_best_move(board, &mut nodes) {
        Some((cell, _)) => Ok(cell),
        None => Err(GameError::NoMovesAvailable),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
