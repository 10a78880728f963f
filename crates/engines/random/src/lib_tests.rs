use super::*;

#[test]
fn random_engine_returns_empty_cell() {
    let mut engine = RandomEngine::new();
    let board = Board::from_grid("XOXXO.O.. X");

    let result = engine.search(&board);

    let cell = result.best_move.unwrap();
    assert!(board.mark_at(cell).is_none());
    assert!(board.empty_cells().contains(&cell));
}

#[test]
fn random_engine_handles_won_board() {
    let mut engine = RandomEngine::new();
    let board = Board::from_grid("XXX...OO. O");

    let result = engine.search(&board);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_full_board() {
    let mut engine = RandomEngine::new();
    let board = Board::from_grid("XOXXOOOXX O");

    let result = engine.search(&board);

    assert!(result.best_move.is_none());
}
