// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::Direction;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub engine: EngineConfig,
    pub appearance: AppearanceConfig,
    pub debug: DebugConfig,
}

/// Decision engine constants
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    pub critical_radius: i32,
    pub emergency_order: Vec<Direction>,
    pub boxed_in_default: Direction,
    pub malformed_input_default: Direction,
}

impl EngineConfig {
    /// The scan order for emergency and substitute moves
    ///
    /// Falls back to the canonical order if the configured list is empty.
    pub fn scan_order(&self) -> Vec<Direction> {
        if self.emergency_order.is_empty() {
            vec![Direction::Right, Direction::Left, Direction::Up, Direction::Down]
        } else {
            self.emergency_order.clone()
        }
    }
}

/// Metadata returned from GET /
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            engine: EngineConfig {
                critical_radius: 4,
                emergency_order: vec![
                    Direction::Right,
                    Direction::Left,
                    Direction::Up,
                    Direction::Down,
                ],
                boxed_in_default: Direction::Up,
                malformed_input_default: Direction::Up,
            },
            appearance: AppearanceConfig {
                author: "pathfinder".to_string(),
                color: "#00FF00".to_string(),
                head: "pixel".to_string(),
                tail: "bolt".to_string(),
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
