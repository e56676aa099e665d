use std::fmt;
use std::sync::Arc;

use schoolrun_auth::TokenService;
use schoolrun_config::JwtConfig;

use crate::store::{MemoryUserStore, UserStore};

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

/// State backed by an in-memory store.
pub fn init_app_state(jwt_config: &JwtConfig) -> AppState {
    AppState::new(
        Arc::new(MemoryUserStore::new()),
        Arc::new(TokenService::new(jwt_config)),
    )
}
