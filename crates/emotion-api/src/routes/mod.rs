//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{analysis, detect, health};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(analysis_routes())
        .merge(detect_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Emotion analysis and stored results
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analysis::analyze_image))
        .route("/results", get(analysis::list_results))
}

/// Logo detection
fn detect_routes() -> Router<AppState> {
    Router::new().route("/detect", post(detect::detect_logo))
}
