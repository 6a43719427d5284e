use crate::modules::games::application::errors::ApplicationError;
use crate::modules::games::core::game::Game;
use crate::modules::games::use_cases::make_move::command::MakeMove;
use crate::shared::infrastructure::game_store::{GameStore, GameStoreError};
use std::sync::Arc;

pub struct MakeMoveHandler<TStore>
where
    TStore: GameStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> MakeMoveHandler<TStore>
where
    TStore: GameStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Read, decide on a private copy, then write back. A concurrent commit in between
    /// surfaces as `VersionConflict`; it is not retried here.
    pub async fn handle(&self, command: MakeMove) -> Result<Game, ApplicationError> {
        let mut game = self.store.get_game(command.game_id).await?;

        if let Err(reason) = game.apply_move(command.as_move()) {
            tracing::debug!(
                game_id = %command.game_id,
                player = %command.player_id,
                %reason,
                "move rejected"
            );
            return Err(ApplicationError::Domain(reason));
        }

        match self.store.update_game(game).await {
            Ok(committed) => Ok(committed),
            Err(GameStoreError::VersionConflict) => {
                tracing::warn!(game_id = %command.game_id, "concurrent move lost the race");
                Err(GameStoreError::VersionConflict.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
