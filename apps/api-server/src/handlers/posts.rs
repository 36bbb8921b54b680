//! Posts, likes, comments and the feed.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use hilite_core::domain::{Comment, FeedItem, FeedSnapshot, Post, build_feed};
use hilite_core::validation::validate_post_content;
use hilite_shared::dto::{
    CommentResponse, ContentRequest, FeedItemResponse, FeedQuery, PostResponse,
};

use super::not_found;
use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

const DEFAULT_FEED_LIMIT: usize = 20;
const MAX_FEED_LIMIT: usize = 100;

fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        user_id: post.user_id.to_string(),
        content: post.content.clone(),
        created_at: post.created_at.to_rfc3339(),
    }
}

fn feed_item_response(item: FeedItem) -> FeedItemResponse {
    FeedItemResponse {
        post: post_response(&item.post),
        like_count: item.like_count,
        comment_count: item.comment_count,
        liked_by_viewer: item.liked_by_viewer,
        time_ago: item.time_ago,
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ContentRequest>,
) -> AppResult<HttpResponse> {
    let content = validate_post_content(&body.content)?;

    let post = state
        .posts
        .save(Post::new(identity.user_id, content))
        .await?;

    tracing::info!(post_id = %post.id, user_id = %identity.user_id, "Post created");

    Ok(HttpResponse::Created().json(post_response(&post)))
}

/// POST /api/posts/{id}/like
pub async fn like_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    state
        .posts
        .like(post_id, identity.user_id)
        .await
        .map_err(not_found("Post", post_id))?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/posts/{id}/like
pub async fn unlike_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    state
        .posts
        .unlike(post_id, identity.user_id)
        .await
        .map_err(not_found("Post", post_id))?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<ContentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let content = validate_post_content(&body.content)?;

    let comment = state
        .posts
        .add_comment(Comment::new(post_id, identity.user_id, content))
        .await
        .map_err(not_found("Post", post_id))?;

    Ok(HttpResponse::Created().json(CommentResponse {
        id: comment.id.to_string(),
        post_id: comment.post_id.to_string(),
        user_id: comment.user_id.to_string(),
        content: comment.content,
        created_at: comment.created_at.to_rfc3339(),
    }))
}

/// GET /api/feed?limit=N
///
/// A token is optional and only decides `liked_by_viewer`.
pub async fn feed(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    query: web::Query<FeedQuery>,
) -> AppResult<HttpResponse> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_FEED_LIMIT)
        .clamp(1, MAX_FEED_LIMIT);

    let FeedSnapshot {
        posts,
        likes,
        comments,
    } = state.posts.feed_snapshot(limit).await?;

    let viewer = viewer.0.map(|identity| identity.user_id);
    let items: Vec<FeedItemResponse> = build_feed(posts, &likes, &comments, viewer, Utc::now())
        .into_iter()
        .map(feed_item_response)
        .collect();

    Ok(HttpResponse::Ok().json(items))
}
