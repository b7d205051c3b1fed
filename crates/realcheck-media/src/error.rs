//! Error types for media classification.

use thiserror::Error;

/// Result type for media classification.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while validating an upload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("Unsupported image format. Use JPG/PNG/JPEG/WEBP.")]
    UnsupportedImageFormat,

    #[error("Unsupported video format. Use MP4/AVI/MOV/MKV/WEBM.")]
    UnsupportedVideoFormat,
}
