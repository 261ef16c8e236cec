// HTTP boundary tests
//
// Mounts the real routes on a local Rocket client and checks the wire shape
// of every endpoint, including the safe fallback for unreadable input.

use pathfinder_snake::build_rocket;
use pathfinder_snake::config::Config;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

fn client() -> Client {
    Client::tracked(build_rocket(Config::default_hardcoded())).expect("valid rocket instance")
}

fn game_body(game_id: &str, turn: i32) -> String {
    json!({
        "game": {"id": game_id, "timeout": 500},
        "turn": turn,
        "board": {
            "width": 11,
            "height": 11,
            "food": [{"x": 8, "y": 5}],
            "snakes": [
                {"id": "me", "name": "me", "health": 100,
                 "body": [{"x": 5, "y": 5}, {"x": 4, "y": 5}, {"x": 3, "y": 5}]}
            ]
        },
        "you": {"id": "me", "name": "me", "health": 100,
                "body": [{"x": 5, "y": 5}, {"x": 4, "y": 5}, {"x": 3, "y": 5}]}
    })
    .to_string()
}

#[test]
fn test_index_returns_metadata() {
    let client = client();
    let response = client.get("/").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["apiversion"], "1");
    assert_eq!(body["author"], "pathfinder");
}

#[test]
fn test_ping_answers_pong() {
    let client = client();
    let response = client.post("/ping").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["message"], "pong");
}

#[test]
fn test_full_game_lifecycle() {
    let client = client();

    let start = client
        .post("/start")
        .header(ContentType::JSON)
        .body(game_body("http-game", 0))
        .dispatch();
    assert_eq!(start.status(), Status::Ok);

    let mv = client
        .post("/move")
        .header(ContentType::JSON)
        .body(game_body("http-game", 0))
        .dispatch();
    assert_eq!(mv.status(), Status::Ok);
    let body: Value = mv.into_json().unwrap();
    assert_eq!(body["move"], "right");
    assert_eq!(body["shout"], "plan-committed");

    let end = client
        .post("/end")
        .header(ContentType::JSON)
        .body(game_body("http-game", 1))
        .dispatch();
    assert_eq!(end.status(), Status::Ok);
}

#[test]
fn test_unparseable_move_gets_default() {
    let client = client();
    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body("{\"game\": {\"id\": \"broken\"}, \"turn\": 0")
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["move"], "up");
    assert_eq!(body["shout"], "malformed-input");
}

#[test]
fn test_incomplete_snapshot_gets_default() {
    let client = client();
    let body = json!({
        "game": {"id": "no-board"},
        "turn": 0,
        "you": {"id": "me", "body": [{"x": 1, "y": 1}]}
    })
    .to_string();

    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["move"], "up");
    assert_eq!(body["shout"], "malformed-input");
}

#[test]
fn test_off_board_food_gets_default() {
    let client = client();
    let mut body: Value = serde_json::from_str(&game_body("far-food", 0)).unwrap();
    body["board"]["food"] = json!([{"x": i32::MIN, "y": 5}]);

    let response = client
        .post("/move")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["move"], "up");
    assert_eq!(body["shout"], "malformed-input");
}

#[test]
fn test_server_header_is_set() {
    let client = client();
    let response = client.get("/").dispatch();

    assert_eq!(
        response.headers().get_one("Server"),
        Some("battlesnake/pathfinder-snake")
    );
}
