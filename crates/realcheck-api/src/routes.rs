//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::{health, predict};
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        // Uploads carry whole video files; no structural size limit applies
        .route("/predict", post(predict).layer(DefaultBodyLimit::disable()));

    let index = format!("{}/index.html", state.config.static_dir);
    let static_routes = Router::new()
        .route_service("/", ServeFile::new(index))
        .nest_service("/web", ServeDir::new(&state.config.static_dir));

    Router::new()
        .nest("/api", api_routes)
        .merge(static_routes)
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
