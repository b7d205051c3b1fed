//! Detection service status types.

use serde::Serialize;
use std::fmt;

/// Upstream connectivity status reported by the gateway's health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    /// Health probe returned a success status.
    Connected,
    /// Health probe returned a non-success status.
    Error,
    /// Health probe failed at the transport level.
    Unreachable,
}

impl ApiStatus {
    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Connected => "connected",
            ApiStatus::Error => "error",
            ApiStatus::Unreachable => "unreachable",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
