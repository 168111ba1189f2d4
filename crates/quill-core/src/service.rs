//! Post service - the boundary used by the page, admin and API handlers.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::DomainError;
use crate::ports::PostRepository;
use crate::query::{self, RECENT_LIMIT};

/// Data behind the public index page.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub posts: Vec<Post>,
    pub recent_posts: Vec<Post>,
}

/// Data behind a single post page.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub post: Post,
    pub recent_posts: Vec<Post>,
}

/// Post operations on top of a [`PostRepository`].
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, DomainError> {
        Ok(self.repo.append(draft).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.all().await?)
    }

    pub async fn list_published(&self) -> Result<Vec<Post>, DomainError> {
        let all = self.repo.all().await?;
        Ok(query::published(&all))
    }

    pub async fn get_by_id(&self, id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Published posts plus the recent-posts list.
    pub async fn home_page(&self) -> Result<HomeView, DomainError> {
        let posts = self.list_published().await?;
        let recent_posts = query::recent(&posts, RECENT_LIMIT);

        Ok(HomeView {
            posts,
            recent_posts,
        })
    }

    /// A post plus the sidebar of other published posts.
    ///
    /// Works on one snapshot so the post and its sidebar are consistent.
    pub async fn post_page(&self, id: PostId) -> Result<PostView, DomainError> {
        let all = self.repo.all().await?;
        let post = query::by_id(&all, id)?;
        let recent_posts = query::sidebar_recent(&all, post.id, RECENT_LIMIT);

        Ok(PostView { post, recent_posts })
    }
}
