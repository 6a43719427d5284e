use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::core::moves::Move;
use crate::modules::games::use_cases::get_game::view::GameView;
use crate::modules::games::use_cases::make_move::command::MakeMove;
use crate::shared::infrastructure::game_store::GameStoreError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    body: Result<Json<Move>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(game_id) = Uuid::parse_str(&game_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = MakeMove {
        game_id,
        player_id: body.player_id,
        x: body.x,
        y: body.y,
    };

    match state.make_move_handler.handle(command).await {
        Ok(game) => Json(GameView::from(&game)).into_response(),
        Err(ApplicationError::Domain(reason)) => {
            (StatusCode::BAD_REQUEST, reason.to_string()).into_response()
        }
        Err(ApplicationError::Store(GameStoreError::NotFound)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(ApplicationError::Store(GameStoreError::VersionConflict)) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %game_id, "make move failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
