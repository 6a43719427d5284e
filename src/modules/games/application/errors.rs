use crate::modules::games::core::moves::MoveError;
use crate::shared::infrastructure::game_store::GameStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] GameStoreError),

    #[error(transparent)]
    Domain(#[from] MoveError),
}
