//! In-memory user records.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use hilite_core::domain::User;
use hilite_core::error::RepoError;
use hilite_core::ports::{BaseRepository, UserRepository};

/// User store keyed by ID, guarded by an async `RwLock`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mask an email for logging so records don't leak PII: `j***@example.com`.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    /// Insert or replace. Fails if another user already owns the email.
    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&user.email));
        if taken {
            return Err(RepoError::Constraint("email already registered".to_string()));
        }

        tracing::debug!(user_id = %user.id, user_email = %mask_email(&user.email), "Saving user");
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn update_bio(&self, user_id: Uuid, bio: Option<String>) -> Result<User, RepoError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or(RepoError::NotFound)?;

        user.bio = bio;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}
