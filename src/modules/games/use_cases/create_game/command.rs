use crate::modules::games::core::player::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateGame {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
}
