use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::modules::games::use_cases::create_game::inbound::http as create_http;
use crate::modules::games::use_cases::get_game::inbound::http as get_http;
use crate::modules::games::use_cases::make_move::inbound::http as move_http;
use crate::shell::graphql::GRAPHQL_PATH;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(GRAPHQL_PATH) }))
        .route("/api/game", post(create_http::handle))
        .route(
            "/api/game/{game_id}",
            get(get_http::handle).put(move_http::handle),
        )
        .with_state(state)
}
