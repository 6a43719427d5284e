// In memory implementation of the GameStore port.
//
// One mutex guards the whole map. It is held for a single operation and never across a
// sleep or a call back into the caller.

use crate::modules::games::core::game::{Game, GameId};
use crate::modules::games::core::player::PlayerId;
use crate::shared::infrastructure::game_store::{GameStore, GameStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryGameStore {
    games: Mutex<HashMap<GameId, Game>>,
    delay_update_ms: AtomicU64,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `update_game` wait before taking the lock, so that concurrent writers can
    /// be interleaved deterministically.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }
}

fn active_between(games: &HashMap<GameId, Game>, a: PlayerId, b: PlayerId) -> bool {
    games.values().any(|g| g.is_between(a, b) && !g.is_over())
}

#[async_trait::async_trait]
impl GameStore for InMemoryGameStore {
    async fn create_game(
        &self,
        player1: PlayerId,
        player2: PlayerId,
    ) -> Result<GameId, GameStoreError> {
        let mut game =
            Game::new(Uuid::now_v7(), player1, player2).ok_or(GameStoreError::InvalidPlayers)?;
        let mut games = self.games.lock().await;
        if active_between(&games, player1, player2) {
            return Err(GameStoreError::ConflictingGameInProgress);
        }
        game.bump_version();
        let id = game.id();
        games.insert(id, game);
        Ok(id)
    }

    async fn get_game(&self, id: GameId) -> Result<Game, GameStoreError> {
        let games = self.games.lock().await;
        games.get(&id).cloned().ok_or(GameStoreError::NotFound)
    }

    async fn update_game(&self, mut game: Game) -> Result<Game, GameStoreError> {
        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut games = self.games.lock().await;
        let stored = games.get_mut(&game.id()).ok_or(GameStoreError::NotFound)?;
        if stored.version() != game.version() {
            return Err(GameStoreError::VersionConflict);
        }
        game.bump_version();
        *stored = game.clone();
        Ok(game)
    }

    async fn has_active_game_between(
        &self,
        player1: PlayerId,
        player2: PlayerId,
    ) -> Result<bool, GameStoreError> {
        let games = self.games.lock().await;
        Ok(active_between(&games, player1, player2))
    }
}
