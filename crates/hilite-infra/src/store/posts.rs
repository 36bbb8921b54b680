//! In-memory posts, likes and comments.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use hilite_core::domain::{Comment, FeedSnapshot, Like, Post};
use hilite_core::error::RepoError;
use hilite_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Tables {
    posts: HashMap<Uuid, Post>,
    likes: HashMap<(Uuid, Uuid), Like>,
    comments: Vec<Comment>,
}

impl Tables {
    fn require_post(&self, post_id: Uuid) -> Result<(), RepoError> {
        if self.posts.contains_key(&post_id) {
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn recent(&self, limit: usize) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts.truncate(limit);
        posts
    }

    fn likes_for(&self, post_ids: &[Uuid]) -> Vec<Like> {
        let wanted: HashSet<&Uuid> = post_ids.iter().collect();
        self.likes
            .values()
            .filter(|like| wanted.contains(&like.post_id))
            .cloned()
            .collect()
    }

    // Appended in arrival order, so already oldest first.
    fn comments_for(&self, post_ids: &[Uuid]) -> Vec<Comment> {
        let wanted: HashSet<&Uuid> = post_ids.iter().collect();
        self.comments
            .iter()
            .filter(|comment| wanted.contains(&comment.post_id))
            .cloned()
            .collect()
    }
}

/// Post store. All three tables sit behind one lock so a like or comment can
/// never reference a post that is not there.
#[derive(Default)]
pub struct InMemoryPostRepository {
    tables: RwLock<Tables>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.tables.write().await;
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn recent(&self, limit: usize) -> Result<Vec<Post>, RepoError> {
        Ok(self.tables.read().await.recent(limit))
    }

    async fn like(&self, post_id: Uuid, user_id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_post(post_id)?;

        tables
            .likes
            .entry((post_id, user_id))
            .or_insert_with(|| Like::new(post_id, user_id));
        Ok(())
    }

    async fn unlike(&self, post_id: Uuid, user_id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_post(post_id)?;

        tables.likes.remove(&(post_id, user_id));
        Ok(())
    }

    async fn likes_for(&self, post_ids: &[Uuid]) -> Result<Vec<Like>, RepoError> {
        Ok(self.tables.read().await.likes_for(post_ids))
    }

    async fn add_comment(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.tables.write().await;
        tables.require_post(comment.post_id)?;

        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn comments_for(&self, post_ids: &[Uuid]) -> Result<Vec<Comment>, RepoError> {
        Ok(self.tables.read().await.comments_for(post_ids))
    }

    async fn feed_snapshot(&self, limit: usize) -> Result<FeedSnapshot, RepoError> {
        let tables = self.tables.read().await;

        let posts = tables.recent(limit);
        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        Ok(FeedSnapshot {
            likes: tables.likes_for(&ids),
            comments: tables.comments_for(&ids),
            posts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    async fn seeded() -> (InMemoryPostRepository, Post) {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .save(Post::new(Uuid::new_v4(), "First!".to_string()))
            .await
            .unwrap();
        (repo, post)
    }

    #[tokio::test]
    async fn test_recent_newest_first_and_limited() {
        let repo = InMemoryPostRepository::new();
        let author = Uuid::new_v4();
        let now = Utc::now();
        for hours in [3, 1, 2] {
            let post = Post {
                created_at: now - TimeDelta::hours(hours),
                ..Post::new(author, format!("{hours}h"))
            };
            repo.save(post).await.unwrap();
        }

        let recent = repo.recent(2).await.unwrap();
        let contents: Vec<&str> = recent.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["1h", "2h"]);
    }

    #[tokio::test]
    async fn test_like_is_idempotent() {
        let (repo, post) = seeded().await;
        let user = Uuid::new_v4();

        repo.like(post.id, user).await.unwrap();
        repo.like(post.id, user).await.unwrap();
        assert_eq!(repo.likes_for(&[post.id]).await.unwrap().len(), 1);

        repo.unlike(post.id, user).await.unwrap();
        repo.unlike(post.id, user).await.unwrap();
        assert!(repo.likes_for(&[post.id]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engagement_on_missing_post() {
        let repo = InMemoryPostRepository::new();
        let missing = Uuid::new_v4();

        assert!(matches!(
            repo.like(missing, Uuid::new_v4()).await,
            Err(RepoError::NotFound)
        ));
        let comment = Comment::new(missing, Uuid::new_v4(), "hi".to_string());
        assert!(matches!(
            repo.add_comment(comment).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_feed_snapshot_covers_only_recent_posts() {
        let repo = InMemoryPostRepository::new();
        let user = Uuid::new_v4();
        let now = Utc::now();
        let old = repo
            .save(Post {
                created_at: now - TimeDelta::hours(2),
                ..Post::new(user, "old".to_string())
            })
            .await
            .unwrap();
        let new = repo
            .save(Post::new(user, "new".to_string()))
            .await
            .unwrap();

        for post in [&old, &new] {
            repo.like(post.id, user).await.unwrap();
            repo.add_comment(Comment::new(post.id, user, "hi".to_string()))
                .await
                .unwrap();
        }

        let snapshot = repo.feed_snapshot(1).await.unwrap();
        assert_eq!(snapshot.posts, vec![new.clone()]);
        assert_eq!(snapshot.likes.len(), 1);
        assert_eq!(snapshot.likes[0].post_id, new.id);
        assert_eq!(snapshot.comments.len(), 1);
        assert_eq!(snapshot.comments[0].post_id, new.id);
    }

    #[tokio::test]
    async fn test_comments_filtered_by_post() {
        let (repo, post) = seeded().await;
        let other = repo
            .save(Post::new(Uuid::new_v4(), "Second".to_string()))
            .await
            .unwrap();
        let user = Uuid::new_v4();

        repo.add_comment(Comment::new(post.id, user, "one".to_string()))
            .await
            .unwrap();
        repo.add_comment(Comment::new(other.id, user, "two".to_string()))
            .await
            .unwrap();
        repo.add_comment(Comment::new(post.id, user, "three".to_string()))
            .await
            .unwrap();

        let comments = repo.comments_for(&[post.id]).await.unwrap();
        let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "three"]);
    }
}
