//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `auth` (default) - Argon2-backed static user directory
//!
//! Build with `default-features = false` for the in-memory post store only.

pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports
pub use store::InMemoryPostStore;

#[cfg(feature = "auth")]
pub use auth::StaticUserDirectory;
