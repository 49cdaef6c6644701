//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::{dashboard, select_route},
    analysis::{templated_analysis, custom_analysis},
    api::{api_routes, api_route_detail, api_route_map, api_current_map},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                   get(dashboard))
        .route("/select",             post(select_route))
        .route("/analysis/template",  post(templated_analysis))
        .route("/analysis/custom",    post(custom_analysis))

        // API endpoints
        .route("/api/routes",              get(api_routes))
        .route("/api/routes/{name}",       get(api_route_detail))
        .route("/api/routes/{name}/map",   get(api_route_map))
        .route("/api/map",                 get(api_current_map))
        .route("/health",                  get(health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
