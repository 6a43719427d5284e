use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::games::core::player::PlayerId;
use crate::modules::games::use_cases::create_game::command::CreateGame;
use crate::shared::infrastructure::game_store::GameStoreError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateGameMutation;

#[Object]
impl CreateGameMutation {
    async fn create_game(
        &self,
        context: &Context<'_>,
        player1_id: u32,
        player2_id: u32,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateGame {
            player1_id: PlayerId::new(player1_id),
            player2_id: PlayerId::new(player2_id),
        };
        if !command.player1_id.is_well_formed() || !command.player2_id.is_well_formed() {
            return Err(async_graphql::Error::new(
                GameStoreError::InvalidPlayers.to_string(),
            ));
        }

        let game_id = state
            .create_game_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(game_id.to_string()))
    }
}
