// Shared test fixture for the MakeMove command.

use crate::modules::games::core::game::GameId;
use crate::modules::games::core::player::PlayerId;
use crate::modules::games::use_cases::make_move::command::MakeMove;
use crate::tests::fixtures::games::PLAYER_ONE;

pub struct MakeMoveBuilder {
    inner: MakeMove,
}

#[allow(dead_code)]
impl MakeMoveBuilder {
    /// Player one opening in the centre.
    pub fn new(game_id: GameId) -> Self {
        Self {
            inner: MakeMove {
                game_id,
                player_id: PLAYER_ONE,
                x: 1,
                y: 1,
            },
        }
    }

    pub fn player_id(mut self, v: PlayerId) -> Self {
        self.inner.player_id = v;
        self
    }

    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.inner.x = x;
        self.inner.y = y;
        self
    }

    pub fn build(self) -> MakeMove {
        self.inner
    }
}

#[cfg(test)]
mod make_move_builder_tests {
    use super::*;
    use crate::tests::fixtures::games::PLAYER_TWO;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn setters_override_the_defaults() {
        let game_id = Uuid::now_v7();
        let command = MakeMoveBuilder::new(game_id)
            .player_id(PLAYER_TWO)
            .at(2, 0)
            .build();

        assert_eq!(command.game_id, game_id);
        assert_eq!(command.player_id, PLAYER_TWO);
        assert_eq!((command.x, command.y), (2, 0));
    }
}
