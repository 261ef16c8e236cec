// Per-game state registry
//
// One `GameMemory` per game identifier. The outer lock is held only long
// enough to find or insert a record; each game then has its own lock, so
// distinct games decide in parallel and turns within a game stay sequential.

use log::{debug, info};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::engine::GameMemory;

#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Mutex<HashMap<String, Arc<Mutex<GameMemory>>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        GameRegistry::default()
    }

    /// Creates fresh state for `game_id`, replacing any existing record
    pub fn start(&self, game_id: &str) {
        let previous = self
            .games
            .lock()
            .insert(game_id.to_string(), Arc::new(Mutex::new(GameMemory::new())));
        if previous.is_some() {
            info!("Game {} restarted, previous state discarded", game_id);
        }
    }

    /// Releases the state for `game_id`; returns whether any existed
    pub fn end(&self, game_id: &str) -> bool {
        self.games.lock().remove(game_id).is_some()
    }

    /// Returns the record for `game_id`, creating an empty one if it is missing
    pub fn get_or_create(&self, game_id: &str) -> Arc<Mutex<GameMemory>> {
        let mut games = self.games.lock();
        games
            .entry(game_id.to_string())
            .or_insert_with(|| {
                debug!("No state for game {}, starting fresh", game_id);
                Arc::new(Mutex::new(GameMemory::new()))
            })
            .clone()
    }

    /// Runs `f` with exclusive access to the game's memory
    pub fn with_game<R>(&self, game_id: &str, f: impl FnOnce(&mut GameMemory) -> R) -> R {
        let record = self.get_or_create(game_id);
        let mut memory = record.lock();
        f(&mut memory)
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.games.lock().contains_key(game_id)
    }

    pub fn active_games(&self) -> usize {
        self.games.lock().len()
    }
}
