// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's lifecycle methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use serde_json::Value;

use crate::bot::Bot;
use crate::types::GameState;

/// GET / endpoint
/// Returns bot metadata and appearance configuration
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.info())
}

/// POST /ping endpoint
/// Liveness check, never touches game state
#[post("/ping")]
pub fn ping(bot: &rocket::State<Bot>) -> Json<Value> {
    Json(bot.ping())
}

/// POST /start endpoint
/// Called when a game starts - resets per-game state
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<GameState>) -> Json<Value> {
    Json(bot.start(&start_req))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move.
/// A body that fails to decode still gets a move back.
#[post("/move", format = "json", data = "<move_req>")]
pub fn get_move(
    bot: &rocket::State<Bot>,
    move_req: Result<Json<GameState>, json::Error<'_>>,
) -> Json<Value> {
    match move_req {
        Ok(req) => Json(bot.get_move(&req)),
        Err(e) => Json(bot.fallback_move(&e.to_string())),
    }
}

/// POST /end endpoint
/// Called when a game ends - releases per-game state
#[post("/end", format = "json", data = "<end_req>")]
pub fn end(bot: &rocket::State<Bot>, end_req: Json<GameState>) -> Status {
    bot.end(&end_req);

    Status::Ok
}
