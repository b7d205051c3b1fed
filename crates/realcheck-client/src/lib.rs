//! Client for the upstream deepfake-detection service.
//!
//! The service exposes `detect/image` and `detect/video` endpoints that
//! accept base64-encoded payloads and return fake/real scores, plus a
//! `/health` probe. Detection calls are single best-effort attempts with a
//! fixed timeout; failures are reported to the caller, never retried.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DetectorClient, DetectorConfig};
pub use error::{DetectorError, DetectorResult};
pub use types::ApiStatus;
