use async_graphql::{Context, ID, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::games::core::player::PlayerId;
use crate::modules::games::use_cases::get_game::inbound::graphql::GqlGame;
use crate::modules::games::use_cases::make_move::command::MakeMove;
use crate::shared::infrastructure::game_store::GameStoreError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct MakeMoveMutation;

#[Object]
impl MakeMoveMutation {
    async fn make_move(
        &self,
        context: &Context<'_>,
        game_id: ID,
        player_id: u32,
        x: i32,
        y: i32,
    ) -> GqlResult<GqlGame> {
        let game_id = Uuid::parse_str(&game_id)
            .map_err(|_| async_graphql::Error::new(GameStoreError::NotFound.to_string()))?;
        let state = context.data_unchecked::<AppState>();

        let command = MakeMove {
            game_id,
            player_id: PlayerId::new(player_id),
            x: x.into(),
            y: y.into(),
        };

        let game = state
            .make_move_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlGame::from(&game))
    }
}
