//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use emotion_common::{AppConfig, AppError};
use emotion_db::{create_pool, run_migrations, PgAnalysisResultRepository};
use emotion_inference::{HttpInferenceClient, InferenceClientConfig};
use emotion_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = emotion_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create inference client
    let inference_config = InferenceClientConfig::new(config.inference.base_url.clone())
        .with_timeout(Duration::from_secs(config.inference.timeout_secs))
        .with_connect_timeout(Duration::from_secs(config.inference.connect_timeout_secs));
    let inference = HttpInferenceClient::new(inference_config)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    info!(base_url = %inference.base_url(), "Inference client ready");

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .result_repo(Arc::new(PgAnalysisResultRepository::new(pool)))
        .inference(Arc::new(inference))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}
