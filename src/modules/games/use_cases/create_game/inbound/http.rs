use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::core::player::PlayerId;
use crate::modules::games::use_cases::create_game::command::CreateGame;
use crate::shared::infrastructure::game_store::GameStoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameParams {
    pub player1_id: u32,
    pub player2_id: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreatedResponse {
    pub game_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<CreateGameParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    let command = CreateGame {
        player1_id: PlayerId::new(params.player1_id),
        player2_id: PlayerId::new(params.player2_id),
    };
    if !command.player1_id.is_well_formed() || !command.player2_id.is_well_formed() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.create_game_handler.handle(command).await {
        Ok(game_id) => Json(GameCreatedResponse {
            game_id: game_id.to_string(),
        })
        .into_response(),
        Err(ApplicationError::Store(GameStoreError::InvalidPlayers)) => {
            StatusCode::BAD_REQUEST.into_response()
        }
        Err(ApplicationError::Store(GameStoreError::ConflictingGameInProgress)) => {
            StatusCode::CONFLICT.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "create game failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
