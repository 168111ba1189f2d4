//! Data Transfer Objects - request/response types for the HTTP layer.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Blog CMS is running".to_string(),
        }
    }
}

/// Fields submitted by the admin "new post" form.
///
/// The form posts `tags` once per tag, so it is decoded from raw
/// key/value pairs rather than a flat struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
    pub author: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub image_url: String,
}

impl CreatePostForm {
    /// Build the form from url-decoded pairs.
    ///
    /// Missing fields stay empty. For single-valued fields the first
    /// occurrence wins. `published` is set only by the checkbox value `on`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        let mut seen = Vec::new();

        for (key, value) in pairs {
            if key == "tags" {
                form.tags.push(value);
                continue;
            }
            if seen.contains(&key) {
                continue;
            }

            match key.as_str() {
                "title" => form.title = value,
                "content" => form.content = value,
                "author" => form.author = value,
                "excerpt" => form.excerpt = value,
                "image_url" => form.image_url = value,
                "published" => form.published = value == "on",
                _ => continue,
            }
            seen.push(key);
        }

        form
    }
}
