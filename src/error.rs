// Error taxonomy for the decision engine
//
// Every failure inside the engine is one of these. The HTTP boundary logs it
// and answers with the configured safe default move instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("snapshot for game '{game_id}' has no body for snake '{snake_id}'")]
    MissingBody { game_id: String, snake_id: String },

    #[error("snapshot for game '{game_id}' on turn {turn} has no board dimensions")]
    MissingDimensions { game_id: String, turn: i32 },

    #[error("board dimensions {width}x{height} are not usable")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("{item} at ({x}, {y}) lies outside the {width}x{height} board")]
    OffBoard {
        item: &'static str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("opponent '{snake_id}' has an empty body")]
    EmptyOpponentBody { snake_id: String },

    #[error("no food on the board")]
    NoFood,
}
