// Board snapshot model
//
// Validates one turn's request and holds the facts the engine reasons over.
// Opponents are separated from self by identifier, never by structural equality.

use crate::error::EngineError;
use crate::types::{Battlesnake, Coord, GameState};

/// Largest accepted board side; real boards are far smaller
pub const MAX_BOARD_SIDE: i32 = 1024;

/// Board width and height, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        if width <= 0 || height <= 0 || width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Dimensions { width, height })
    }

    /// Checks whether a coordinate lies on the board
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    fn check(&self, item: &'static str, coord: &Coord) -> Result<(), EngineError> {
        if self.contains(coord) {
            return Ok(());
        }
        Err(EngineError::OffBoard {
            item,
            x: coord.x,
            y: coord.y,
            width: self.width,
            height: self.height,
        })
    }
}

/// Immutable facts for one turn of one game
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub game_id: String,
    pub self_id: String,
    pub turn: i32,
    /// Present whenever the request carried dimensions
    pub dimensions: Option<Dimensions>,
    /// Own body, head first
    pub body: Vec<Coord>,
    pub food: Vec<Coord>,
    /// Every snake on the board except self
    pub opponents: Vec<Battlesnake>,
}

impl Snapshot {
    /// Builds a snapshot from a decoded request
    ///
    /// Fails if the self body is missing, dimensions are missing on turn 0 or
    /// malformed, any opponent has an empty body, or a coordinate lies off a
    /// board whose dimensions are given.
    pub fn from_request(state: &GameState) -> Result<Self, EngineError> {
        let self_id = state.you.id.clone();

        // `you` normally carries the body; fall back to the board listing
        let body = if state.you.body.is_empty() {
            state
                .board
                .snakes
                .iter()
                .find(|s| s.id == self_id)
                .map(|s| s.body.clone())
                .unwrap_or_default()
        } else {
            state.you.body.clone()
        };

        if body.is_empty() {
            return Err(EngineError::MissingBody {
                game_id: state.game.id.clone(),
                snake_id: self_id,
            });
        }

        let dimensions = match (state.board.width, state.board.height) {
            (Some(width), Some(height)) => Some(Dimensions::new(width, height)?),
            _ => None,
        };

        if state.turn == 0 && dimensions.is_none() {
            return Err(EngineError::MissingDimensions {
                game_id: state.game.id.clone(),
                turn: state.turn,
            });
        }

        let opponents: Vec<Battlesnake> = state
            .board
            .snakes
            .iter()
            .filter(|s| s.id != self_id)
            .cloned()
            .collect();

        if let Some(empty) = opponents.iter().find(|s| s.is_empty()) {
            return Err(EngineError::EmptyOpponentBody {
                snake_id: empty.id.clone(),
            });
        }

        let snapshot = Snapshot {
            game_id: state.game.id.clone(),
            self_id,
            turn: state.turn,
            dimensions,
            body,
            food: state.board.food.clone(),
            opponents,
        };

        if let Some(dims) = dimensions {
            snapshot.check_bounds(dims)?;
        }

        Ok(snapshot)
    }

    /// Rejects any body segment or food item outside `dims`
    ///
    /// Run again by the engine when dimensions come from an earlier turn.
    pub fn check_bounds(&self, dims: Dimensions) -> Result<(), EngineError> {
        for segment in &self.body {
            dims.check("self segment", segment)?;
        }
        for opponent in &self.opponents {
            for segment in &opponent.body {
                dims.check("opponent segment", segment)?;
            }
        }
        for item in &self.food {
            dims.check("food", item)?;
        }
        Ok(())
    }

    /// Head of the self snake; the body is never empty after validation
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn self_length(&self) -> usize {
        self.body.len()
    }
}
