//! Application state - shared across all handlers.

use std::sync::Arc;

use hilite_core::ports::{PasswordService, PostRepository, TokenService, UserRepository};
use hilite_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService,
};

/// Shared application state. Cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// State backed by the in-memory store.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        tracing::info!("Application state initialized (in-memory store)");

        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
