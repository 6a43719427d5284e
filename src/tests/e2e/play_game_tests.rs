// Whole games played through the REST router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::games::{DRAW, FIRST_PLAYER_WINS, SECOND_PLAYER_WINS, Script};

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_game(app: &Router, player1: u32, player2: u32) -> Response {
    send(
        app,
        Request::post(format!("/api/game?player1Id={player1}&player2Id={player2}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn start(app: &Router) -> String {
    let response = create_game(app, 1, 2).await;
    assert_eq!(response.status(), StatusCode::OK);
    json(response).await["gameId"].as_str().unwrap().to_string()
}

async fn make_move(app: &Router, game_id: &str, player: u32, x: i64, y: i64) -> Response {
    send(
        app,
        Request::put(format!("/api/game/{game_id}"))
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"playerId":{player},"x":{x},"y":{y}}}"#
            )))
            .unwrap(),
    )
    .await
}

async fn play_through(app: &Router, game_id: &str, script: Script) {
    for &(player, x, y) in script {
        let response = make_move(app, game_id, player.get(), x, y).await;
        assert_eq!(response.status(), StatusCode::OK, "{player}:({x},{y})");
    }
}

async fn view(app: &Router, game_id: &str) -> serde_json::Value {
    let response = send(
        app,
        Request::get(format!("/api/game/{game_id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    json(response).await
}

#[tokio::test]
async fn it_should_report_the_first_player_as_winner() {
    let app = router(AppState::in_memory());
    let game_id = start(&app).await;
    play_through(&app, &game_id, FIRST_PLAYER_WINS).await;

    assert_eq!(
        view(&app, &game_id).await,
        serde_json::json!({ "winnerId": 1, "gameOver": true })
    );
}

#[tokio::test]
async fn it_should_report_the_second_player_as_winner() {
    let app = router(AppState::in_memory());
    let game_id = start(&app).await;
    play_through(&app, &game_id, SECOND_PLAYER_WINS).await;

    assert_eq!(
        view(&app, &game_id).await,
        serde_json::json!({ "winnerId": 2, "gameOver": true })
    );
}

#[tokio::test]
async fn it_should_report_a_draw() {
    let app = router(AppState::in_memory());
    let game_id = start(&app).await;
    play_through(&app, &game_id, DRAW).await;

    assert_eq!(
        view(&app, &game_id).await,
        serde_json::json!({ "winnerId": null, "gameOver": true })
    );
}

#[tokio::test]
async fn it_should_reject_moves_on_a_finished_game() {
    let app = router(AppState::in_memory());
    let game_id = start(&app).await;
    play_through(&app, &game_id, FIRST_PLAYER_WINS).await;

    let response = make_move(&app, &game_id, 2, 2, 2).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_enforce_turn_order() {
    let app = router(AppState::in_memory());
    let game_id = start(&app).await;

    let steps = [
        (2, 1, 1, StatusCode::BAD_REQUEST),
        (1, 1, 1, StatusCode::OK),
        (1, 2, 2, StatusCode::BAD_REQUEST),
        (2, 2, 2, StatusCode::OK),
        (2, 2, 2, StatusCode::BAD_REQUEST),
    ];
    for (player, x, y, expected) in steps {
        let response = make_move(&app, &game_id, player, x, y).await;
        assert_eq!(response.status(), expected, "{player}:({x},{y})");
    }
}

#[tokio::test]
async fn it_should_allow_a_rematch_once_the_game_is_finished() {
    let app = router(AppState::in_memory());
    let game_id = start(&app).await;

    let response = create_game(&app, 2, 1).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    play_through(&app, &game_id, FIRST_PLAYER_WINS).await;

    let response = create_game(&app, 1, 2).await;
    assert_eq!(response.status(), StatusCode::OK);
}
