// Shared game fixtures: fixed players and complete move scripts.

use crate::modules::games::core::game::Game;
use crate::modules::games::core::moves::Move;
use crate::modules::games::core::player::PlayerId;
use uuid::Uuid;

pub const PLAYER_ONE: PlayerId = PlayerId::new(1);
pub const PLAYER_TWO: PlayerId = PlayerId::new(2);
pub const STRANGER: PlayerId = PlayerId::new(3);

pub type Script = &'static [(PlayerId, i64, i64)];

/// Column x = 0 for player one.
pub const FIRST_PLAYER_WINS: Script = &[
    (PLAYER_ONE, 0, 0),
    (PLAYER_TWO, 1, 0),
    (PLAYER_ONE, 0, 1),
    (PLAYER_TWO, 2, 0),
    (PLAYER_ONE, 0, 2),
];

pub const SECOND_PLAYER_WINS: Script = &[
    (PLAYER_ONE, 0, 0),
    (PLAYER_TWO, 1, 0),
    (PLAYER_ONE, 0, 1),
    (PLAYER_TWO, 1, 1),
    (PLAYER_ONE, 2, 2),
    (PLAYER_TWO, 1, 2),
];

pub const DRAW: Script = &[
    (PLAYER_ONE, 0, 0),
    (PLAYER_TWO, 0, 1),
    (PLAYER_ONE, 0, 2),
    (PLAYER_TWO, 1, 1),
    (PLAYER_ONE, 1, 0),
    (PLAYER_TWO, 1, 2),
    (PLAYER_ONE, 2, 1),
    (PLAYER_TWO, 2, 0),
    (PLAYER_ONE, 2, 2),
];

pub fn mv(player_id: PlayerId, x: i64, y: i64) -> Move {
    Move { player_id, x, y }
}

pub fn new_game() -> Game {
    Game::new(Uuid::now_v7(), PLAYER_ONE, PLAYER_TWO).unwrap()
}

pub fn play(game: &mut Game, script: &[(PlayerId, i64, i64)]) {
    for &(player, x, y) in script {
        game.apply_move(mv(player, x, y))
            .unwrap_or_else(|e| panic!("move {player}:({x},{y}) rejected: {e}"));
    }
}
