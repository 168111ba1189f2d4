use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Post repository - the single owner of all posts and the id counter.
///
/// Implementations must serialise `append` against every other call so
/// readers never observe a half-finished insert.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Assign the next id and creation timestamps, store the post at the
    /// end of the sequence and return it.
    async fn append(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// All posts in insertion order.
    async fn all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;
}
