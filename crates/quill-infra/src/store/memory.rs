//! In-memory post store.
//!
//! Posts live in a `Vec` behind a single async `RwLock`. Appends take the
//! write side; reads take the read side and hand out clones.
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

struct PostLog {
    posts: Vec<Post>,
    next_id: PostId,
}

/// In-memory post store with monotonic id assignment.
pub struct InMemoryPostStore {
    log: RwLock<PostLog>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Build a store holding existing posts, in the given order.
    /// New ids continue after the highest seeded id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            log: RwLock::new(PostLog { posts, next_id }),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn append(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut log = self.log.write().await;

        let id = log.next_id;
        log.next_id += 1;

        let post = Post::from_draft(id, draft, Utc::now());
        log.posts.push(post.clone());
        drop(log);

        tracing::debug!(post_id = id, title = %post.title, "Post appended");
        Ok(post)
    }

    async fn all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.log.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let log = self.log.read().await;
        Ok(log.posts.iter().find(|p| p.id == id).cloned())
    }
}
