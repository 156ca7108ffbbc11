//! Public routes for the Invitation Viewer.

use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use shubh_core::error::DomainError;
use tracing::instrument;

use shubh_viewer::application::query_handlers::{self, InvitationView};
use shubh_viewer::domain::deity::Deity;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the invitation endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DeityQuery {
    /// Motif override; the profile's preference applies when absent.
    pub deity: Option<String>,
}

/// Parses an optional `deity` query value.
///
/// # Errors
///
/// Returns `ApiError` wrapping `DomainError::Validation` for an unknown tag.
pub(crate) fn parse_deity(raw: Option<&str>) -> Result<Option<Deity>, ApiError> {
    raw.map(str::parse::<Deity>)
        .transpose()
        .map_err(|e| ApiError(DomainError::Validation(e.to_string())))
}

/// GET /{design}/{slug}
#[instrument(skip(state))]
async fn open_invitation(
    State(state): State<AppState>,
    Path((design, slug)): Path<(String, String)>,
    Query(query): Query<DeityQuery>,
) -> Result<Json<InvitationView>, ApiError> {
    let deity = parse_deity(query.deity.as_deref())?;
    let view =
        query_handlers::open_invitation(&design, &slug, deity, state.viewer_sources()).await?;
    Ok(Json(view))
}

/// GET /{slug}
#[instrument(skip(state))]
async fn open_preferred_invitation(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<DeityQuery>,
) -> Result<Json<InvitationView>, ApiError> {
    let deity = parse_deity(query.deity.as_deref())?;
    let view =
        query_handlers::open_preferred_invitation(&slug, deity, state.viewer_sources()).await?;
    Ok(Json(view))
}

/// Returns the router for the invitation endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(open_preferred_invitation))
        .route("/{design}/{slug}", get(open_invitation))
}
