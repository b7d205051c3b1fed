//! Detection service HTTP client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, warn};

use realcheck_models::AssetKind;

use crate::error::{DetectorError, DetectorResult};
use crate::types::ApiStatus;

/// Configuration for the detector client.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Base URL of the detection service
    pub base_url: String,
    /// Bearer API key; empty means unconfigured
    pub api_key: String,
    /// Request timeout for detection calls
    pub timeout: Duration,
    /// Timeout for the health probe
    pub probe_timeout: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.realitydefender.com".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            probe_timeout: Duration::from_secs(5),
        }
    }
}

impl DetectorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: std::env::var("DETECTOR_API_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("DETECTOR_API_KEY").unwrap_or_default(),
            timeout: Duration::from_secs(
                std::env::var("DETECTOR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            probe_timeout: defaults.probe_timeout,
        }
    }

    /// Returns true if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Client for the deepfake-detection service.
#[derive(Clone)]
pub struct DetectorClient {
    http: Client,
    config: DetectorConfig,
}

impl DetectorClient {
    /// Create a new detector client.
    pub fn new(config: DetectorConfig) -> DetectorResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DetectorError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> DetectorResult<Self> {
        Self::new(DetectorConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Probe the detection service health endpoint.
    ///
    /// Probe failures are absorbed into the returned status, never surfaced
    /// as errors.
    pub async fn probe_health(&self) -> ApiStatus {
        let url = format!("{}/health", self.config.base_url);

        match self
            .http
            .get(&url)
            .timeout(self.config.probe_timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => ApiStatus::Connected,
            Ok(response) => {
                warn!("detection service health probe returned {}", response.status());
                ApiStatus::Error
            }
            Err(e) => {
                warn!("detection service unreachable: {e}");
                ApiStatus::Unreachable
            }
        }
    }

    /// Submit bytes for deepfake detection.
    ///
    /// Single attempt with the configured timeout. The endpoint and payload
    /// key are selected by the asset kind. Returns the raw response body.
    pub async fn detect(&self, data: &[u8], kind: AssetKind) -> DetectorResult<serde_json::Value> {
        let url = format!("{}/detect/{}", self.config.base_url, kind);

        let encoded = BASE64.encode(data);
        let payload = match kind {
            AssetKind::Image => json!({ "image": encoded }),
            AssetKind::Video => json!({ "video": encoded }),
        };

        debug!(%url, kind = %kind, bytes = data.len(), "sending detection request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DetectorError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| DetectorError::InvalidResponse(e.to_string()))
    }
}
