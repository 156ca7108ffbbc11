//! Shubh Invitations — HTTP API.
//!
//! Exposes the content editor's read/write endpoints behind the admin gate
//! and the public invitation viewer's read-only endpoints.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/schema", routes::schema::router())
        .nest("/api/v1/admin", routes::content::router())
        .nest("/api/v1/invite", routes::invite::router())
        .nest("/api/v1/viewer", routes::viewer::router())
        .with_state(state)
}
