//! HTTP Basic authentication for the admin pages.

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, http::StatusCode,
    http::header, web,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use quill_core::domain::Role;
use quill_core::ports::{AuthError, UserDirectory};
use quill_shared::ErrorResponse;

use crate::state::AppState;

const CHALLENGE: &str = r#"Basic realm="restricted""#;

/// Identity of the user reaching an admin route.
///
/// Use this in handlers to require admin credentials:
/// ```ignore
/// async fn admin_route(identity: AdminIdentity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
    pub role: Role,
}

impl AdminIdentity {
    /// Identity used when authentication is skipped in development.
    fn development() -> Self {
        Self {
            username: "development".to_string(),
            role: Role::Admin,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            AuthError::HashingError(_) | AuthError::Unavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Credential check failed: {}", self.0);
            return HttpResponse::InternalServerError().json(ErrorResponse::internal_error());
        }

        HttpResponse::Unauthorized()
            .insert_header((header::WWW_AUTHENTICATE, CHALLENGE))
            .json(ErrorResponse::unauthorized())
    }
}

/// Split a `Basic <base64(user:password)>` header value.
fn parse_basic(value: &str) -> Result<(String, String), AuthError> {
    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| AuthError::MalformedAuth("Expected Basic credentials".to_string()))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|e| AuthError::MalformedAuth(e.to_string()))?;
    let decoded =
        String::from_utf8(decoded).map_err(|e| AuthError::MalformedAuth(e.to_string()))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AuthError::MalformedAuth("Missing ':' separator".to_string()))?;

    Ok((username.to_string(), password.to_string()))
}

/// What is left to do once the request headers have been read.
enum PendingCheck {
    Development,
    Basic {
        users: Arc<dyn UserDirectory>,
        username: String,
        password: String,
    },
}

fn pending_check(req: &HttpRequest) -> Result<PendingCheck, AuthError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        return Err(AuthError::Unavailable(
            "AppState not found in app data".to_string(),
        ));
    };

    if state.env.is_development() {
        return Ok(PendingCheck::Development);
    }

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?
        .to_str()
        .map_err(|_| AuthError::MalformedAuth("Invalid authorization header".to_string()))?;

    let (username, password) = parse_basic(header_value)?;
    Ok(PendingCheck::Basic {
        users: state.users.clone(),
        username,
        password,
    })
}

async fn authenticate(pending: PendingCheck) -> Result<AdminIdentity, AuthError> {
    let (users, username, password) = match pending {
        PendingCheck::Development => return Ok(AdminIdentity::development()),
        PendingCheck::Basic {
            users,
            username,
            password,
        } => (users, username, password),
    };

    // Argon2 verification is CPU-bound; keep it off the worker thread.
    let user = web::block(move || users.authenticate(&username, &password))
        .await
        .map_err(|e| AuthError::Unavailable(e.to_string()))??;

    Ok(AdminIdentity {
        username: user.username,
        role: user.role,
    })
}

impl FromRequest for AdminIdentity {
    type Error = AuthenticationError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let path = req.path().to_string();
        let pending = pending_check(req);

        Box::pin(async move {
            let result = match pending {
                Ok(pending) => authenticate(pending).await,
                Err(e) => Err(e),
            };
            result.map_err(|e| {
                tracing::warn!(error = %e, path = %path, "Admin authentication failed");
                AuthenticationError(e)
            })
        })
    }
}
