// Standalone replay tool for re-running Battlesnake debug logs
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --game <id>            Replay only this game (default: every game in the log)
//   --verbose              Show detailed output for each turn
//   --config <path>        Path to Snake.toml (default: Snake.toml)

use std::env;
use std::process;

use pathfinder_snake::config::Config;
use pathfinder_snake::replay::ReplayEngine;

fn print_usage() {
    eprintln!("Battlesnake Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --game <id>             Replay a single game");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --config <path>         Path to Snake.toml (default: Snake.toml)");
    eprintln!("  --help                  Show this help message");
}

struct Options {
    log_file: String,
    game: Option<String>,
    verbose: bool,
    config_path: String,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut log_file = None;
    let mut game = None;
    let mut verbose = false;
    let mut config_path = "Snake.toml".to_string();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--game" => {
                game = Some(iter.next().ok_or("--game requires a value")?.clone());
            }
            "--verbose" => verbose = true,
            "--config" => {
                config_path = iter.next().ok_or("--config requires a value")?.clone();
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option: {}", other));
            }
            other => {
                if log_file.is_some() {
                    return Err(format!("Unexpected argument: {}", other));
                }
                log_file = Some(other.to_string());
            }
        }
    }

    Ok(Options {
        log_file: log_file.ok_or("Missing log file")?,
        game,
        verbose,
        config_path,
    })
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    let config = Config::from_file(&options.config_path).unwrap_or_else(|e| {
        eprintln!("Warning: {} ({}), using hardcoded defaults", e, options.config_path);
        Config::default_hardcoded()
    });

    let engine = ReplayEngine::new(config, options.verbose);

    let entries = match engine.load_log_file(&options.log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let results = match &options.game {
        Some(game_id) => engine.replay_game(&entries, game_id),
        None => engine.replay_all(&entries),
    };

    match results {
        Ok(results) => {
            engine.print_report(&results);
            if results.iter().any(|r| !r.matches) {
                process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
