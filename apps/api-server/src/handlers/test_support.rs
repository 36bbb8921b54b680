//! Fixtures for handler tests.

use actix_web::http::header::{AUTHORIZATION, HeaderName};

use hilite_core::domain::User;
use hilite_infra::JwtConfig;

use crate::state::AppState;

pub fn state() -> AppState {
    AppState::in_memory(JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
        issuer: "hilite-test".to_string(),
    })
}

/// Store a user directly and issue a token for them.
pub async fn signed_in(state: &AppState, email: &str) -> (User, String) {
    let user = state
        .users
        .save(User::new(
            "Test User".to_string(),
            email.to_string(),
            "not-a-real-hash".to_string(),
        ))
        .await
        .unwrap();
    let token = state.tokens.generate_token(user.id).unwrap();
    (user, token)
}

pub fn bearer(token: &str) -> (HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}
