use crate::modules::games::core::game::GameId;
use crate::modules::games::core::moves::Move;
use crate::modules::games::core::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeMove {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub x: i64,
    pub y: i64,
}

impl MakeMove {
    pub fn as_move(&self) -> Move {
        Move {
            player_id: self.player_id,
            x: self.x,
            y: self.y,
        }
    }
}
