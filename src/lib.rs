// Library exports for the Pathfinder Battlesnake
// The server binary, the replay tool and the integration tests all build on these modules

#[macro_use]
extern crate rocket;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

pub mod arbiter;
pub mod bot;
pub mod config;
pub mod critical;
pub mod debug_logger;
pub mod engine;
pub mod error;
pub mod handler;
pub mod occupancy;
pub mod path;
pub mod registry;
pub mod replay;
pub mod snapshot;
pub mod targeting;
pub mod types;

/// Builds the HTTP server with every Battlesnake route mounted
pub fn build_rocket(config: config::Config) -> Rocket<Build> {
    let bot = bot::Bot::new(config);

    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/pathfinder-snake");
            })
        }))
        .mount(
            "/",
            routes![
                handler::index,
                handler::ping,
                handler::start,
                handler::get_move,
                handler::end
            ],
        )
}
