use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::core::game::GameId;
use crate::modules::games::use_cases::create_game::command::CreateGame;
use crate::shared::infrastructure::game_store::GameStore;
use std::sync::Arc;

pub struct CreateGameHandler<TStore>
where
    TStore: GameStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateGameHandler<TStore>
where
    TStore: GameStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateGame) -> Result<GameId, ApplicationError> {
        let game_id = self
            .store
            .create_game(command.player1_id, command.player2_id)
            .await?;
        tracing::info!(
            %game_id,
            player1 = %command.player1_id,
            player2 = %command.player2_id,
            "game created"
        );
        Ok(game_id)
    }
}
