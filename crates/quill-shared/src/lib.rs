//! # Quill Shared
//!
//! Request and response shapes used at the HTTP edge.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
