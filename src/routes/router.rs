/**
 * Router Configuration
 *
 * This module assembles the complete Axum router:
 *
 * 1. The /api route table
 * 2. Static serving of uploaded images under /uploads
 * 3. CORS, request tracing, and a body-size limit for image uploads
 * 4. A JSON 404 fallback
 */

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Upper bound on request bodies; image uploads comfortably fit below this.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    configure_api_routes(app_state.clone())
        .nest_service("/uploads", ServeDir::new(&app_state.uploads_dir))
        .fallback(|| async { ApiError::NotFound("Route not found".to_string()) })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(app_state)
}
