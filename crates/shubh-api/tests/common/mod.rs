//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use shubh_core::profile::{ProfileEvent, ProfileRef};
use shubh_core::repository::StoredContent;
use shubh_test_support::{FixedClock, InMemoryContentStore, StaticProfileDirectory};
use shubh_viewer::domain::design::DesignCatalog;
use tower::ServiceExt;
use uuid::Uuid;

use shubh_api::state::AppState;

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const SLUG: &str = "priya-weds-rajesh";

/// Fixed timestamp used across all integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// One seeded profile with a Haldi event (content saved) and a Reception
/// event (never saved), sharing an in-memory store across requests.
pub struct TestContext {
    pub profile_id: Uuid,
    pub haldi_id: Uuid,
    pub reception_id: Uuid,
    pub store: Arc<InMemoryContentStore>,
    state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let profile_id = Uuid::new_v4();
        let haldi_id = Uuid::new_v4();
        let reception_id = Uuid::new_v4();

        let store = Arc::new(InMemoryContentStore::with_records([StoredContent {
            profile_id,
            event_id: haldi_id,
            payload: serde_json::json!({
                "event_type": "haldi",
                "event_content": { "bride_name": "Priya", "groom_name": "Rajesh" }
            }),
            updated_at: fixed_now(),
        }]));
        let profiles = StaticProfileDirectory::new(vec![ProfileRef {
            profile_id,
            slug: SLUG.to_string(),
            design_id: Some("royal_classic".to_string()),
            deity_id: Some("venkateswara".to_string()),
            main_date: Some("2026-12-12".to_string()),
            events: vec![
                ProfileEvent {
                    event_id: haldi_id,
                    start_time: Some("09:00".to_string()),
                },
                ProfileEvent {
                    event_id: reception_id,
                    start_time: Some("19:00".to_string()),
                },
            ],
        }]);

        let state = AppState::new(
            Arc::new(FixedClock(fixed_now())),
            store.clone(),
            Arc::new(profiles),
            Arc::new(DesignCatalog::builtin().unwrap()),
            ADMIN_TOKEN,
        );

        Self {
            profile_id,
            haldi_id,
            reception_id,
            store,
            state,
        }
    }

    /// Build the full app router. Uses the same route structure as `main.rs`.
    pub fn app(&self) -> Router {
        shubh_api::app(self.state.clone())
    }

    pub fn content_uri(&self, event_id: Uuid) -> String {
        format!(
            "/api/v1/admin/profiles/{}/events/{event_id}/content",
            self.profile_id
        )
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a PUT request with a raw body (which need not be valid JSON) and the
/// admin token.
pub async fn put_raw(
    app: Router,
    uri: &str,
    body: &'static str,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {ADMIN_TOKEN}"))
        .body(Body::from(body))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    get_json_as(app, uri, None).await
}

/// Send a GET request, optionally with the admin bearer token.
pub async fn get_json_as(
    app: Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}
