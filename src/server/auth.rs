//! Bearer-credential gate for the report routes
//!
//! Token issuance and identity live with the external auth service; the
//! engine only checks that the presented credential is acceptable.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::error_response;
use super::AppState;

pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> bool;
}

/// Accepts a single shared secret from configuration
pub struct StaticTokenValidator {
    token: String,
}

impl StaticTokenValidator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenValidator for StaticTokenValidator {
    fn validate(&self, token: &str) -> bool {
        token == self.token
    }
}

pub(crate) async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| state.validator.validate(token));

    if !authorized {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "missing or invalid bearer credential",
        );
    }
    next.run(request).await
}
