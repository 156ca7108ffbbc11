//! Public route exposing the viewer's phase derivation.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;

use shubh_viewer::application::query_handlers::{self, RenderSnapshot};

use crate::error::ApiError;
use crate::routes::invite::parse_deity;
use crate::state::AppState;

/// Query string for GET /render.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Theme id.
    pub design: String,
    /// Motif; Ganesha when absent.
    pub deity: Option<String>,
    /// Milliseconds since the session started.
    #[serde(default)]
    pub elapsed_ms: u64,
}

/// GET /render
async fn render(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<RenderSnapshot>, ApiError> {
    let deity = parse_deity(query.deity.as_deref())?.unwrap_or_default();
    let snapshot = query_handlers::render_snapshot(
        &state.designs,
        &query.design,
        deity,
        Duration::from_millis(query.elapsed_ms),
    )?;
    Ok(Json(snapshot))
}

/// Returns the router for the viewer endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/render", get(render))
}
