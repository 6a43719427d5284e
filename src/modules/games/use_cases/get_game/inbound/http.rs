use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::use_cases::get_game::view::GameView;
use crate::shared::infrastructure::game_store::GameStoreError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> impl IntoResponse {
    let Ok(game_id) = Uuid::parse_str(&game_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.get_game_handler.handle(game_id).await {
        Ok(game) => Json(GameView::from(&game)).into_response(),
        Err(ApplicationError::Store(GameStoreError::NotFound)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %game_id, "get game failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
