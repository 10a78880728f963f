//! Tournament CLI
//!
//! Run matches between tic-tac-toe engines.

use std::env;
use std::path::Path;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner, TournamentResults};
use ttt_core::Engine;

fn print_usage() {
    println!("Tic-tac-toe Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--config FILE] [--save FILE]");
    println!();
    println!("Engines:");
    println!("  minimax       - Exhaustive search, plays perfectly");
    println!("  random        - Uniform random empty cell");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 100");
    println!("  tournament match minimax minimax --games 2 --save results.json");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" | "perfect" => Box::new(MinimaxEngine::new()),
        "random" | "rand" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using minimax", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut config = MatchConfig::default();
    let mut save_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match MatchConfig::load(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--save" | "-s" => {
                if i + 1 < args.len() {
                    save_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}", config.num_games);
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = save_path {
        let mut results = TournamentResults::new(
            "match",
            vec![engine1_spec.clone(), engine2_spec.clone()],
            config,
        );
        results.add_match(engine1_spec, engine2_spec, result);
        if let Err(e) = results.save(Path::new(&path)) {
            eprintln!("Warning: Failed to save results: {}", e);
        } else {
            println!("Results saved to {}", path);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
        }
    }
}
