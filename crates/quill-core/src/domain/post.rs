use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier. Assigned by the store, starting at 1.
pub type PostId = u64;

/// Post entity - a single blog article with its publication metadata.
///
/// Field order is the order of the public JSON listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub excerpt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published: bool,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl Post {
    /// Build a post from a draft. Both timestamps are set to `now`.
    pub fn from_draft(id: PostId, draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            excerpt: draft.excerpt,
            created_at: now,
            updated_at: now,
            published: draft.published,
            tags: draft.tags,
            image_url: draft.image_url,
        }
    }
}

/// The unsaved fields of a post, before an id and timestamps are assigned.
///
/// No field is validated: empty titles and bodies are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub excerpt: String,
    pub published: bool,
    pub tags: Vec<String>,
    pub image_url: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }
}
