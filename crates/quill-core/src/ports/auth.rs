//! Authentication ports.

use crate::domain::User;

/// Directory of back-office users able to reach the admin pages.
pub trait UserDirectory: Send + Sync {
    /// Check a username/password pair and return the matching user.
    fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Malformed authorization header: {0}")]
    MalformedAuth(String),

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Authentication backend unavailable: {0}")]
    Unavailable(String),
}
