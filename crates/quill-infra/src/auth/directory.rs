//! Static, Argon2-hashed user directory.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use quill_core::domain::{Role, User};
use quill_core::ports::{AuthError, UserDirectory};

/// A plain-text credential, hashed when the directory is built.
#[derive(Debug, Clone, Copy)]
pub struct Credential<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub role: Role,
}

/// Built-in back-office accounts.
const BUILTIN_USERS: [Credential<'static>; 2] = [
    Credential {
        username: "admin",
        password: "admin123",
        role: Role::Admin,
    },
    Credential {
        username: "editor",
        password: "editor123",
        role: Role::Editor,
    },
];

/// User directory fixed at start-up. Passwords are only kept as hashes.
pub struct StaticUserDirectory {
    argon2: Argon2<'static>,
    users: Vec<User>,
}

impl StaticUserDirectory {
    /// Directory holding the built-in admin and editor accounts.
    pub fn builtin() -> Result<Self, AuthError> {
        Self::from_credentials(Argon2::default(), &BUILTIN_USERS)
    }

    /// Hash every credential with `argon2` and keep the resulting users.
    pub fn from_credentials(
        argon2: Argon2<'static>,
        credentials: &[Credential<'_>],
    ) -> Result<Self, AuthError> {
        let users = credentials
            .iter()
            .map(|c| {
                let salt = SaltString::generate(&mut OsRng);
                let hash = argon2
                    .hash_password(c.password.as_bytes(), &salt)
                    .map_err(|e| AuthError::HashingError(e.to_string()))?;
                Ok(User::new(c.username, hash.to_string(), c.role))
            })
            .collect::<Result<Vec<_>, AuthError>>()?;

        tracing::info!(users = users.len(), "User directory loaded");
        Ok(Self { argon2, users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserDirectory for StaticUserDirectory {
    fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| u.username == username)
            .ok_or(AuthError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AuthError::InvalidCredentials)?;

        tracing::debug!(username = %user.username, "User authenticated");
        Ok(user.clone())
    }
}
