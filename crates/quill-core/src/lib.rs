//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! Posts, users, the read-only query views and the service boundary the
//! HTTP layer talks to. No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
