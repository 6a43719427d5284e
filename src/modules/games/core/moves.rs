use crate::modules::games::core::player::PlayerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub player_id: PlayerId,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("this game is already finished")]
    GameAlreadyFinished,

    #[error("incorrect coordinates")]
    InvalidCoordinates,

    #[error("you are not a participant of this game")]
    NotAParticipant,

    #[error("can't make a move for one point twice")]
    CellAlreadyTaken,

    #[error("it's not your move")]
    OutOfTurn,
}
