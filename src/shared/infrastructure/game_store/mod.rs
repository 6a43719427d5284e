// Port for game storage.
//
// Purpose
// - Hand out private snapshots of games and take mutated snapshots back.
//
// Responsibilities
// - Serialize every operation against one exclusivity domain.
// - Detect lost updates by comparing the snapshot's version with the stored one.
// - Refuse a second unfinished game between the same two players.

use crate::modules::games::core::game::{Game, GameId};
use crate::modules::games::core::player::PlayerId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameStoreError {
    #[error("a game needs two distinct players")]
    InvalidPlayers,

    #[error("a game between these players is already in progress")]
    ConflictingGameInProgress,

    #[error("game was modified by another writer")]
    VersionConflict,

    #[error("game not found")]
    NotFound,
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create_game(
        &self,
        player1: PlayerId,
        player2: PlayerId,
    ) -> Result<GameId, GameStoreError>;

    /// Returns an independent copy; mutating it never touches stored state.
    async fn get_game(&self, id: GameId) -> Result<Game, GameStoreError>;

    /// Commits `game` if its version still matches, returning the committed snapshot.
    async fn update_game(&self, game: Game) -> Result<Game, GameStoreError>;

    async fn has_active_game_between(
        &self,
        player1: PlayerId,
        player2: PlayerId,
    ) -> Result<bool, GameStoreError>;
}

pub mod in_memory;
