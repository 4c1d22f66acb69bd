//! Axum router — maps URL paths to handlers.

use axum::{
    Router,
    routing::get,
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    analyze::{analyze_page, analyze_submit, api_analyze},
    health::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",        get(analyze_page))
        .route("/analyze", get(analyze_page).post(analyze_submit))

        // API endpoints
        .route("/api/analyze", get(api_analyze))
        .route("/health",      get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
