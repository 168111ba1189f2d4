//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use quill_core::PostService;
use quill_core::ports::{PostRepository, UserDirectory};
use quill_infra::store::seed;
use quill_infra::{InMemoryPostStore, StaticUserDirectory};

use crate::config::{AppConfig, AppEnv};
use crate::render::Templates;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub users: Arc<dyn UserDirectory>,
    pub templates: Arc<Templates>,
    pub env: AppEnv,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store = if config.seed_sample_posts {
            InMemoryPostStore::with_posts(seed::sample_posts())
        } else {
            InMemoryPostStore::new()
        };
        let repo: Arc<dyn PostRepository> = Arc::new(store);

        let templates = Templates::load(&config.template_dir).with_context(|| {
            format!(
                "failed to load templates from {}",
                config.template_dir.display()
            )
        })?;

        let users = StaticUserDirectory::builtin().context("failed to build user directory")?;

        tracing::info!(
            env = config.env.as_str(),
            seeded = config.seed_sample_posts,
            "Application state initialized"
        );

        Ok(Self::from_parts(
            PostService::new(repo),
            Arc::new(users),
            Arc::new(templates),
            config.env,
        ))
    }

    pub fn from_parts(
        posts: PostService,
        users: Arc<dyn UserDirectory>,
        templates: Arc<Templates>,
        env: AppEnv,
    ) -> Self {
        Self {
            posts,
            users,
            templates,
            env,
        }
    }
}
