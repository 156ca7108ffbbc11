//! Shubh Invitations API server entry point.

use std::sync::Arc;

use shubh_api::config::ApiConfig;
use shubh_api::error::AppError;
use shubh_api::state::AppState;
use shubh_core::clock::SystemClock;
use shubh_store::pg_content_store::PgContentStore;
use shubh_store::pg_profile_directory::PgProfileDirectory;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Shubh Invitations API server");

    let config = ApiConfig::from_env()?;
    let designs = config.load_designs()?;
    tracing::info!(
        designs = designs.designs().len(),
        default_design = %designs.default_design(),
        "design catalog loaded"
    );

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(PgContentStore::new(pool.clone())),
        Arc::new(PgProfileDirectory::new(pool)),
        Arc::new(designs),
        config.admin_token.as_str(),
    );

    // TODO: Replace CorsLayer::permissive() with the invitation site's origin.
    let app = shubh_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
