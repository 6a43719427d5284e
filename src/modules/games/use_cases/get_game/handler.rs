use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::core::game::{Game, GameId};
use crate::shared::infrastructure::game_store::GameStore;
use std::sync::Arc;

pub struct GetGameHandler<TStore>
where
    TStore: GameStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetGameHandler<TStore>
where
    TStore: GameStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, game_id: GameId) -> Result<Game, ApplicationError> {
        Ok(self.store.get_game(game_id).await?)
    }
}
