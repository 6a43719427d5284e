use async_graphql::{Context, ID, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::core::game::Game;
use crate::shared::infrastructure::game_store::GameStoreError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Game")]
pub struct GqlGame {
    pub winner_id: Option<u32>,
    pub game_over: bool,
}

impl From<&Game> for GqlGame {
    fn from(game: &Game) -> Self {
        Self {
            winner_id: game.winner().map(|p| p.get()),
            game_over: game.is_over(),
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn game(&self, context: &Context<'_>, game_id: ID) -> GqlResult<Option<GqlGame>> {
        let Ok(game_id) = Uuid::parse_str(&game_id) else {
            return Ok(None);
        };
        let state = context.data_unchecked::<AppState>();
        match state.get_game_handler.handle(game_id).await {
            Ok(game) => Ok(Some(GqlGame::from(&game))),
            Err(ApplicationError::Store(GameStoreError::NotFound)) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(e.to_string())),
        }
    }
}
