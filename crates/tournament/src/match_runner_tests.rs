use super::*;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use ttt_core::SearchResult;

#[test]
fn test_perfect_self_play_always_ties() {
    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = MinimaxEngine::new();

    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.draws, 2);
}

#[test]
fn test_perfect_engine_never_loses_to_random() {
    let mut perfect = MinimaxEngine::new();
    let mut random = RandomEngine::new();

    // Alternating roles, so the perfect engine plays both X and O
    let result = quick_match(&mut perfect, &mut random, 20);

    assert_eq!(result.total_games(), 20);
    assert_eq!(result.losses, 0);
}

/// An engine that always names cell 0, occupied or not.
struct StuckEngine;

impl Engine for StuckEngine {
    fn search(&mut self, _board: &Board) -> SearchResult {
        SearchResult {
            best_move: Some(0),
            score: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Stuck"
    }
}

#[test]
fn test_illegal_move_forfeits_the_game() {
    let mut stuck = StuckEngine;
    let mut perfect = MinimaxEngine::new();

    let result = quick_match(&mut stuck, &mut perfect, 2);

    // Whichever role it draws, the stuck engine replays cell 0 and loses
    assert_eq!(result.wins, 0);
    assert_eq!(result.losses, 2);
}
