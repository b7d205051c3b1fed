//! Content classification for uploaded media.
//!
//! Decides whether an upload is an image or a video from its filename
//! extension, falling back to an image decode probe when the extension is
//! not recognized.

pub mod classify;
pub mod error;

pub use classify::{classify, is_image_bytes, validate_extension};
pub use error::{MediaError, MediaResult};
