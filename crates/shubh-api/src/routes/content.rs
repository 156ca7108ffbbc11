//! Admin routes for the Event Content context.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use shubh_core::error::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use shubh_content::application::{command_handlers, query_handlers};
use shubh_content::domain::commands;
use shubh_content::domain::editing::EditorForm;
use shubh_content::domain::record::ContentRecord;

use crate::auth::AdminAccess;
use crate::error::ApiError;
use crate::state::AppState;

/// Response body returned after a record is saved.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    /// Owning profile.
    pub profile_id: Uuid,
    /// The event whose record was replaced.
    pub event_id: Uuid,
    /// Timestamp stored with the record.
    pub updated_at: DateTime<Utc>,
}

/// GET /profiles/{profile_id}/events/{event_id}/content
#[instrument(skip(state, _admin))]
async fn get_content(
    _admin: AdminAccess,
    State(state): State<AppState>,
    Path((profile_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, ApiError> {
    let record =
        query_handlers::get_event_content(profile_id, event_id, &*state.content_store).await?;
    Ok(Json(record.to_value()))
}

/// PUT /profiles/{profile_id}/events/{event_id}/content
#[instrument(skip(state, _admin, body))]
async fn put_content(
    _admin: AdminAccess,
    State(state): State<AppState>,
    Path((profile_id, event_id)): Path<(Uuid, Uuid)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(body) = body.map_err(|e| DomainError::Validation(e.body_text()))?;
    let record = ContentRecord::from_value(body)
        .map_err(|e| DomainError::Validation(format!("malformed content record: {e}")))?;
    let command = commands::SaveEventContent {
        correlation_id: Uuid::new_v4(),
        profile_id,
        event_id,
        record,
    };

    info!(correlation_id = %command.correlation_id, "handling save_event_content command");

    let result = command_handlers::handle_save_event_content(
        &command,
        state.clock.as_ref(),
        &*state.content_store,
    )
    .await?;

    Ok(Json(SaveResponse {
        profile_id: result.profile_id,
        event_id: result.event_id,
        updated_at: result.updated_at,
    }))
}

/// GET /profiles/{profile_id}/events/{event_id}/form
#[instrument(skip(state, _admin))]
async fn get_form(
    _admin: AdminAccess,
    State(state): State<AppState>,
    Path((profile_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<EditorForm>, ApiError> {
    let form = query_handlers::get_editor_form(profile_id, event_id, &*state.content_store).await?;
    Ok(Json(form))
}

/// Returns the router for the admin content endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profiles/{profile_id}/events/{event_id}/content",
            get(get_content).put(put_content),
        )
        .route("/profiles/{profile_id}/events/{event_id}/form", get(get_form))
}
