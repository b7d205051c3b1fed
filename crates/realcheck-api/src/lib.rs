//! Axum HTTP API server for the RealCheck detection gateway.
//!
//! This crate provides:
//! - `POST /api/predict`: multipart upload returning a real/fake verdict
//! - `GET /api/health`: gateway status with upstream connectivity
//! - Static serving of the prebuilt frontend bundle

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
