use super::*;

use crate::match_runner::MatchConfig;

#[test]
fn test_record_and_score() {
    let mut result = MatchResult::new();
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    result.record(GameResult::Draw);

    assert_eq!(result.total_games(), 4);
    assert_eq!(result.wins, 1);
    assert_eq!(result.losses, 1);
    assert_eq!(result.draws, 2);
    assert!((result.score() - 0.5).abs() < 1e-9);
}

#[test]
fn test_score_of_empty_match_is_even() {
    assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
}

#[test]
fn test_results_json_roundtrip() {
    let mut results = TournamentResults::new(
        "smoke",
        vec!["minimax".to_string(), "random".to_string()],
        MatchConfig::default(),
    );
    let mut match_result = MatchResult::new();
    match_result.record(GameResult::Win);
    results.add_match("minimax", "random", match_result);

    let json = serde_json::to_string(&results).unwrap();
    let loaded: TournamentResults = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded.name, "smoke");
    assert_eq!(loaded.matches.len(), 1);
    assert_eq!(loaded.matches[0].result.wins, 1);
}

#[test]
fn test_report_lists_matches() {
    let mut results = TournamentResults::new(
        "report",
        vec!["minimax".to_string(), "random".to_string()],
        MatchConfig::default(),
    );
    results.add_match("minimax", "random", MatchResult::new());

    let report = results.generate_report();
    assert!(report.contains("minimax"));
    assert!(report.contains("random"));
}
