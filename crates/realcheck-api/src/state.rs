//! Application state.

use std::sync::Arc;

use realcheck_client::DetectorClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Holds only immutable configuration and the detector client; there is no
/// mutable state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub detector: Arc<DetectorClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig, detector: DetectorClient) -> Self {
        Self {
            config,
            detector: Arc::new(detector),
        }
    }
}
