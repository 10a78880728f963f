//! Match runner for playing games between engines

use serde::{Deserialize, Serialize};
use std::path::Path;

use ttt_core::{cell_to_coord, Board, Engine, Mark, Outcome};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether the engines swap the opening role each game
    pub alternate_first: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_first: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate who opens if configured
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let game_result = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 replied as O
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            result.record(game_result);

            if self.config.verbose {
                let role = if engine1_first { "X" } else { "O" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    role,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game; `first` plays X, `second` plays O.
    ///
    /// Returns the result from `first`'s perspective. A terminal outcome
    /// stops the game immediately; no engine is asked to move once the
    /// board is decided.
    fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameResult {
        let mut board = Board::empty();
        first.new_game();
        second.new_game();

        loop {
            match board.outcome() {
                Outcome::Win(Mark::X) => return GameResult::Win,
                Outcome::Win(Mark::O) => return GameResult::Loss,
                Outcome::Tie => return GameResult::Draw,
                Outcome::InProgress => {}
            }

            let side = board.side_to_move;
            let picked = if side == Mark::X {
                first.search(&board)
            } else {
                second.search(&board)
            };

            match picked.best_move {
                Some(cell) => {
                    if board.apply_move(cell).is_err() {
                        // An engine naming an occupied or invalid cell forfeits
                        return match side {
                            Mark::X => GameResult::Loss,
                            Mark::O => GameResult::Win,
                        };
                    }
                    if self.config.verbose {
                        let name = if side == Mark::X {
                            first.name()
                        } else {
                            second.name()
                        };
                        println!("  {} plays {}", name, cell_to_coord(cell));
                    }
                }
                None => {
                    // Cannot happen before a terminal outcome on a 3x3
                    // board; an engine that resigns anyway forfeits
                    return match side {
                        Mark::X => GameResult::Loss,
                        Mark::O => GameResult::Win,
                    };
                }
            }
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
