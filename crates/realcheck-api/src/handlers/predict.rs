//! Upload prediction handler.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use realcheck_media::{classify, validate_extension};
use realcheck_models::{AssetKind, DetectionVerdict, Label, UploadedAsset};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Prediction response.
#[derive(Serialize)]
pub struct PredictResponse {
    pub label: Label,
    pub confidence: f64,
    pub probs: Probs,
    pub file_type: AssetKind,
    pub api_response: serde_json::Value,
}

/// Class probabilities.
#[derive(Serialize)]
pub struct Probs {
    #[serde(rename = "FAKE")]
    pub fake: f64,
    #[serde(rename = "REAL")]
    pub real: f64,
}

impl From<DetectionVerdict> for PredictResponse {
    fn from(v: DetectionVerdict) -> Self {
        Self {
            label: v.label,
            confidence: v.confidence,
            probs: Probs {
                fake: v.fake_score,
                real: v.real_score,
            },
            file_type: v.kind,
            api_response: v.raw,
        }
    }
}

/// Run an upload through validation, classification, detection and
/// normalization.
///
/// A failed upstream call degrades to the deterministic fallback verdict;
/// only validation failures reach the caller as errors.
pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<PredictResponse>> {
    let asset = read_upload(multipart).await?;

    let kind = classify(&asset.data, &asset.filename);
    validate_extension(kind, &asset.filename)?;

    let verdict = match state.detector.detect(&asset.data, kind).await {
        Ok(raw) => DetectionVerdict::from_remote(kind, raw),
        Err(e) => {
            warn!("detection call failed, using fallback: {e}");
            DetectionVerdict::fallback(kind, &asset.data, &e.to_string())
        }
    };

    Ok(Json(verdict.into()))
}

/// Extract the `file` part from the multipart body.
async fn read_upload(mut multipart: Multipart) -> ApiResult<UploadedAsset> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ApiError::validation("Empty filename"));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;

        return Ok(UploadedAsset {
            filename,
            data: data.to_vec(),
        });
    }

    Err(ApiError::validation("Missing file field 'file'"))
}
