//! Shared data models for the RealCheck detection gateway.
//!
//! This crate provides Serde-serializable types for:
//! - Uploaded assets and their image/video kind
//! - Detection verdicts and score normalization
//! - The deterministic fallback scoring used when the upstream
//!   detection service is unavailable

pub mod asset;
pub mod verdict;

// Re-export common types
pub use asset::{AssetKind, UploadedAsset};
pub use verdict::{DetectionVerdict, Label};
