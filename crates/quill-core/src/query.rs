//! Read-only views derived from a snapshot of the post sequence.
//!
//! Every function here is pure: it takes posts in insertion order and
//! returns a new vector, keeping that order.

use crate::domain::{Post, PostId};
use crate::error::DomainError;

/// Number of posts shown in the "recent posts" lists.
pub const RECENT_LIMIT: usize = 5;

/// Posts flagged as published.
pub fn published(posts: &[Post]) -> Vec<Post> {
    posts.iter().filter(|p| p.published).cloned().collect()
}

/// The first `limit` posts of `published`, in insertion order.
///
/// This is "first inserted", not "most recently created".
pub fn recent(published: &[Post], limit: usize) -> Vec<Post> {
    published.iter().take(limit).cloned().collect()
}

/// Published posts other than `exclude_id`, at most `limit` of them.
pub fn sidebar_recent(posts: &[Post], exclude_id: PostId, limit: usize) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.published && p.id != exclude_id)
        .take(limit)
        .cloned()
        .collect()
}

/// The post with the given id.
pub fn by_id(posts: &[Post], id: PostId) -> Result<Post, DomainError> {
    posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| DomainError::post_not_found(id))
}
