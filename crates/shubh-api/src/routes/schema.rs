//! Public routes describing the per-event-type content schema.

use axum::extract::Path;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use shubh_content::application::query_handlers::{self, SchemaView};

use crate::state::AppState;

/// Response body for the event type listing.
#[derive(Debug, Serialize)]
pub struct EventTypesResponse {
    /// Recognized type tags in editor order.
    pub event_types: Vec<&'static str>,
}

/// GET /
async fn list_event_types() -> Json<EventTypesResponse> {
    Json(EventTypesResponse {
        event_types: query_handlers::list_event_types(),
    })
}

/// GET /{event_type}
async fn describe(Path(event_type): Path<String>) -> Json<SchemaView> {
    Json(query_handlers::describe_schema(&event_type))
}

/// Returns the router for the schema endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_event_types))
        .route("/{event_type}", get(describe))
}
