//! Domain entities - the core business objects.

mod feed;
mod post;
mod user;

pub use feed::{FeedItem, FeedSnapshot, build_feed, time_ago};
pub use post::{Comment, Like, Post};
pub use user::User;
