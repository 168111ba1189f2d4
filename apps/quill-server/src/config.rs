//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Deployment mode, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Admin authentication is skipped.
    Development,
    Production,
}

impl AppEnv {
    /// Unset or empty means development. Only the exact value
    /// `development` keeps it; anything else is production.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("development") => Self::Development,
            Some(_) => Self::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: AppEnv,
    pub host: String,
    pub port: u16,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub seed_sample_posts: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            env: AppEnv::parse(env::var("APP_ENV").ok().as_deref()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            template_dir: env::var("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("templates")),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            seed_sample_posts: env::var("SEED_SAMPLE_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
