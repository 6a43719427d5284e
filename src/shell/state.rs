use crate::modules::games::use_cases::create_game::handler::CreateGameHandler;
use crate::modules::games::use_cases::get_game::handler::GetGameHandler;
use crate::modules::games::use_cases::make_move::handler::MakeMoveHandler;
use crate::shared::infrastructure::game_store::in_memory::InMemoryGameStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_game_handler: Arc<CreateGameHandler<InMemoryGameStore>>,
    pub get_game_handler: Arc<GetGameHandler<InMemoryGameStore>>,
    pub make_move_handler: Arc<MakeMoveHandler<InMemoryGameStore>>,
}

impl AppState {
    /// Wires every handler to one shared store.
    pub fn new(store: Arc<InMemoryGameStore>) -> Self {
        Self {
            create_game_handler: Arc::new(CreateGameHandler::new(store.clone())),
            get_game_handler: Arc::new(GetGameHandler::new(store.clone())),
            make_move_handler: Arc::new(MakeMoveHandler::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryGameStore::new()))
    }
}
