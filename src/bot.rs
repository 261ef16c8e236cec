// Battlesnake bot: lifecycle calls bound to the decision engine
//
// The bot owns the static configuration and the per-game registry. Every
// endpoint resolves to one of the methods below; none of them fail, malformed
// input is answered with the configured safe default move.

use log::{info, warn};
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::engine::Decision;
use crate::error::EngineError;
use crate::registry::GameRegistry;
use crate::snapshot::Snapshot;
use crate::types::{Direction, GameState};

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
    registry: GameRegistry,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        let debug_logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);
        Bot {
            config,
            registry: GameRegistry::new(),
            debug_logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": "1",
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
            "version": env!("CARGO_PKG_VERSION"),
        })
    }

    /// Liveness check, independent of any game
    /// Corresponds to POST /ping endpoint
    pub fn ping(&self) -> Value {
        json!({ "message": "pong" })
    }

    /// Called when a game starts; resets any state held for the game
    /// Corresponds to POST /start endpoint
    pub fn start(&self, state: &GameState) -> Value {
        info!("GAME START {}", state.game.id);
        self.registry.start(&state.game.id);

        let appearance = &self.config.appearance;
        json!({
            "color": appearance.color,
            "headType": appearance.head,
            "tailType": appearance.tail,
        })
    }

    /// Called when a game ends; releases the game's state
    /// Corresponds to POST /end endpoint
    pub fn end(&self, state: &GameState) {
        let released = self.registry.end(&state.game.id);
        info!(
            "GAME OVER {} on turn {} (state released: {})",
            state.game.id, state.turn, released
        );
    }

    /// Computes this turn's move
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move and the reason as shout
    pub fn get_move(&self, state: &GameState) -> Value {
        let (direction, reason) = match self.decide(state) {
            Ok(decision) => {
                info!(
                    "Game {} turn {}: {} ({})",
                    state.game.id,
                    state.turn,
                    decision.direction,
                    decision.reason.as_str()
                );
                (decision.direction, decision.reason.as_str())
            }
            Err(e) => {
                warn!(
                    "Game {} turn {}: {}, answering {}",
                    state.game.id,
                    state.turn,
                    e,
                    self.config.engine.malformed_input_default
                );
                (self.config.engine.malformed_input_default, "malformed-input")
            }
        };

        self.debug_logger.log_move(state, direction, reason);

        Self::move_response(direction, reason)
    }

    /// Runs the engine for one request without any fallback
    pub fn decide(&self, state: &GameState) -> Result<Decision, EngineError> {
        let snapshot = Snapshot::from_request(state)?;
        self.registry
            .with_game(&snapshot.game_id, |memory| memory.decide(&snapshot, &self.config.engine))
    }

    /// Response for a request body that could not be decoded at all
    pub fn fallback_move(&self, detail: &str) -> Value {
        let direction = self.config.engine.malformed_input_default;
        warn!("Unreadable move request ({}), answering {}", detail, direction);
        Self::move_response(direction, "malformed-input")
    }

    fn move_response(direction: Direction, reason: &str) -> Value {
        json!({ "move": direction.as_str(), "shout": reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Battlesnake, Board, Coord, Game};

    fn request(game_id: &str, turn: i32, body: &[(i32, i32)], food: &[(i32, i32)]) -> GameState {
        let you = Battlesnake {
            id: "me".to_string(),
            name: "me".to_string(),
            health: 100,
            body: body.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        };
        GameState {
            game: Game {
                id: game_id.to_string(),
                ruleset: None,
                timeout: Some(500),
            },
            turn,
            board: Board {
                width: Some(11),
                height: Some(11),
                food: food.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
                snakes: vec![you.clone()],
            },
            you,
        }
    }

    #[test]
    fn test_info_contains_appearance() {
        let bot = Bot::new(Config::default_hardcoded());
        let info = bot.info();
        assert_eq!(info["apiversion"], "1");
        assert_eq!(info["color"], "#00FF00");
    }

    #[test]
    fn test_ping_is_independent_of_games() {
        let bot = Bot::new(Config::default_hardcoded());
        assert_eq!(bot.ping()["message"], "pong");
        assert_eq!(bot.registry().active_games(), 0);
    }

    #[test]
    fn test_move_response_shape() {
        let bot = Bot::new(Config::default_hardcoded());
        let response = bot.get_move(&request("g", 0, &[(5, 5), (4, 5)], &[(8, 5)]));
        assert_eq!(response["move"], "right");
        assert_eq!(response["shout"], "plan-committed");
    }

    #[test]
    fn test_malformed_snapshot_gets_default_move() {
        let bot = Bot::new(Config::default_hardcoded());
        let response = bot.get_move(&request("g", 0, &[], &[(8, 5)]));
        assert_eq!(response["move"], "up");
        assert_eq!(response["shout"], "malformed-input");
    }

    #[test]
    fn test_off_board_food_gets_default_move_without_a_plan() {
        let bot = Bot::new(Config::default_hardcoded());

        for far in [200_000_000, i32::MIN] {
            let state = request("far", 0, &[(5, 5), (4, 5)], &[(far, 5)]);
            let response = bot.get_move(&state);
            assert_eq!(response["move"], "up");
            assert_eq!(response["shout"], "malformed-input");
        }
        assert!(!bot.registry().contains("far"));
    }

    #[test]
    fn test_end_then_start_matches_fresh_game() {
        let bot = Bot::new(Config::default_hardcoded());

        let first = request("reused", 0, &[(5, 5), (4, 5)], &[(8, 5)]);
        bot.start(&first);
        bot.get_move(&first);
        bot.end(&first);
        bot.start(&first);
        let reused = bot.get_move(&first);

        let fresh = bot.get_move(&request("never-seen", 0, &[(5, 5), (4, 5)], &[(8, 5)]));
        assert_eq!(reused, fresh);
    }
}
