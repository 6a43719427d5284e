// Externally visible shape of a game. Board, version and participants stay internal.

use crate::modules::games::core::game::Game;
use crate::modules::games::core::player::PlayerId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub winner_id: Option<PlayerId>,
    pub game_over: bool,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            winner_id: game.winner(),
            game_over: game.is_over(),
        }
    }
}
