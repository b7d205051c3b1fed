//! Health check handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use realcheck_client::ApiStatus;

use crate::state::AppState;

/// Upstream service name reported in the health payload.
const SERVICE_NAME: &str = "Reality Defender API";

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_configured: bool,
    pub api_status: ApiStatus,
    pub api_url: String,
    pub service: String,
}

/// Health check endpoint.
///
/// Probes the upstream detection service; probe failures are reported in
/// `api_status` and never surfaced as an error.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let api_status = state.detector.probe_health().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        api_configured: state.detector.config().is_configured(),
        api_status,
        api_url: state.detector.config().base_url.clone(),
        service: SERVICE_NAME.to_string(),
    })
}
