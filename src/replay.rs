// Replay module for re-running logged games through the current engine
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Replay each game's turns in order (the engine keeps memory across turns)
// 3. Compare logged vs replayed moves
// 4. Generate summary reports

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::bot::Bot;
use crate::config::Config;
use crate::debug_logger::DebugLogEntry;
use crate::types::Direction;

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub game_id: String,
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub matches: bool,
    pub reason: String,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    config: Config,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(mut config: Config, verbose: bool) -> Self {
        // Replays must never append to the log they are reading
        config.debug.enabled = false;
        ReplayEngine { config, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DebugLogEntry>, String> {
        let file =
            File::open(log_path.as_ref()).map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DebugLogEntry = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Game identifiers in the order they first appear
    pub fn game_ids(entries: &[DebugLogEntry]) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for entry in entries {
            if !ids.contains(&entry.game_id) {
                ids.push(entry.game_id.clone());
            }
        }
        ids
    }

    /// Replays one game from turn order through a fresh bot
    pub fn replay_game(
        &self,
        entries: &[DebugLogEntry],
        game_id: &str,
    ) -> Result<Vec<ReplayResult>, String> {
        let mut turns: Vec<&DebugLogEntry> =
            entries.iter().filter(|e| e.game_id == game_id).collect();
        if turns.is_empty() {
            return Err(format!("Game '{}' not found in log file", game_id));
        }
        turns.sort_by_key(|e| e.turn);

        let bot = Bot::new(self.config.clone());
        let mut results = Vec::with_capacity(turns.len());

        for entry in turns {
            let original_move = Self::parse_direction(&entry.chosen_move)?;

            let start_time = Instant::now();
            let (replayed_move, reason) = match bot.decide(&entry.request) {
                Ok(decision) => (decision.direction, decision.reason.as_str().to_string()),
                Err(e) => {
                    warn!("Turn {}: {}", entry.turn, e);
                    (
                        self.config.engine.malformed_input_default,
                        "malformed-input".to_string(),
                    )
                }
            };
            let computation_time_us = start_time.elapsed().as_micros();

            let matches = original_move == replayed_move;
            if self.verbose {
                if matches {
                    info!(
                        "Turn {}: ✓ MATCH - {} ({})",
                        entry.turn, replayed_move, reason
                    );
                } else {
                    warn!(
                        "Turn {}: ✗ MISMATCH - Original: {}, Replayed: {} ({})",
                        entry.turn, original_move, replayed_move, reason
                    );
                }
            }

            results.push(ReplayResult {
                game_id: game_id.to_string(),
                turn: entry.turn,
                original_move,
                replayed_move,
                matches,
                reason,
                computation_time_us,
            });
        }

        Ok(results)
    }

    /// Replays every game in the log
    pub fn replay_all(&self, entries: &[DebugLogEntry]) -> Result<Vec<ReplayResult>, String> {
        let mut results = Vec::new();
        for game_id in Self::game_ids(entries) {
            results.extend(self.replay_game(entries, &game_id)?);
        }
        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results
                .iter()
                .map(|r| r.computation_time_us as f64)
                .sum::<f64>()
                / results.len() as f64;
            println!("Average Decision Time:   {:.1}us\n", avg_time);
        }

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Game {} turn {}: {} → {} ({})",
                    result.game_id,
                    result.turn,
                    result.original_move,
                    result.replayed_move,
                    result.reason
                );
            }
            println!();
        }
    }

    /// Helper to parse direction string
    fn parse_direction(s: &str) -> Result<Direction, String> {
        s.parse::<Direction>()
    }
}
