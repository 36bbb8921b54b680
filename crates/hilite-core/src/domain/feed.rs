//! Feed assembly: posts joined with their engagement counts.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::post::{Comment, Like, Post};

/// A post as it appears in the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub post: Post,
    pub like_count: usize,
    pub comment_count: usize,
    pub liked_by_viewer: bool,
    pub time_ago: String,
}

/// Recent posts with their likes and comments, read at a single point in time.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub posts: Vec<Post>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}

#[derive(Default)]
struct Engagement {
    likes: usize,
    comments: usize,
    liked_by_viewer: bool,
}

/// Join `posts` with their likes and comments.
///
/// Output keeps the order of `posts`. Likes and comments for posts not in the
/// list are ignored.
pub fn build_feed(
    posts: Vec<Post>,
    likes: &[Like],
    comments: &[Comment],
    viewer: Option<Uuid>,
    now: DateTime<Utc>,
) -> Vec<FeedItem> {
    let mut engagement: HashMap<Uuid, Engagement> = HashMap::with_capacity(posts.len());

    for like in likes {
        let entry = engagement.entry(like.post_id).or_default();
        entry.likes += 1;
        if viewer == Some(like.user_id) {
            entry.liked_by_viewer = true;
        }
    }
    for comment in comments {
        engagement.entry(comment.post_id).or_default().comments += 1;
    }

    posts
        .into_iter()
        .map(|post| {
            let counts = engagement.remove(&post.id).unwrap_or_default();
            let time_ago = time_ago(post.created_at, now);
            FeedItem {
                post,
                like_count: counts.likes,
                comment_count: counts.comments,
                liked_by_viewer: counts.liked_by_viewer,
                time_ago,
            }
        })
        .collect()
}

/// Relative timestamp such as `"5m ago"`.
///
/// Months are 30 days and years 365 days. Timestamps in the future render as
/// `"just now"`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const WEEK: i64 = 7 * DAY;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let seconds = (now - then).num_seconds();
    match seconds {
        s if s < MINUTE => "just now".to_string(),
        s if s < HOUR => format!("{}m ago", s / MINUTE),
        s if s < DAY => format!("{}h ago", s / HOUR),
        s if s < WEEK => format!("{}d ago", s / DAY),
        s if s < MONTH => format!("{}w ago", s / WEEK),
        s if s < YEAR => format!("{}mo ago", s / MONTH),
        s => format!("{}y ago", s / YEAR),
    }
}
