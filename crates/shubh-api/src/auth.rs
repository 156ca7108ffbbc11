//! Admin capability gate.
//!
//! Content writes (and the editor's reads) require `Authorization: Bearer
//! <ADMIN_TOKEN>`. Handlers opt in by taking an [`AdminAccess`] argument.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use shubh_core::error::DomainError;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carried the admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

/// Compares two secrets without short-circuiting on the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts) {
            Some(token) if constant_time_eq(token.as_bytes(), state.admin_token.as_bytes()) => {
                Ok(AdminAccess)
            }
            Some(_) => {
                warn!(uri = %parts.uri, "rejected admin request with wrong token");
                Err(ApiError(DomainError::Unauthorized(
                    "invalid admin token".to_string(),
                )))
            }
            None => Err(ApiError(DomainError::Unauthorized(
                "admin token required".to_string(),
            ))),
        }
    }
}
