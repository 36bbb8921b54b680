use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, FeedSnapshot, Like, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining the record operations every store offers.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by email address, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Replace a user's bio. `None` clears it.
    async fn update_bio(&self, user_id: Uuid, bio: Option<String>) -> Result<User, RepoError>;
}

/// Post repository, including the likes and comments attached to posts.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Most recent posts, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<Post>, RepoError>;

    /// Record a like. Liking twice is a no-op.
    async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), RepoError>;

    /// Remove a like. Unliking a post that was not liked is a no-op.
    async fn unlike(&self, post_id: Uuid, user_id: Uuid) -> Result<(), RepoError>;

    /// All likes on the given posts.
    async fn likes_for(&self, post_ids: &[Uuid]) -> Result<Vec<Like>, RepoError>;

    async fn add_comment(&self, comment: Comment) -> Result<Comment, RepoError>;

    /// All comments on the given posts, oldest first.
    async fn comments_for(&self, post_ids: &[Uuid]) -> Result<Vec<Comment>, RepoError>;

    /// `recent(limit)` plus the likes and comments on those posts, all read
    /// from the same state.
    async fn feed_snapshot(&self, limit: usize) -> Result<FeedSnapshot, RepoError>;
}
