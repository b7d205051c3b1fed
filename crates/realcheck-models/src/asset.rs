//! Uploaded assets and their image/video kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filename extensions accepted for image uploads.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Filename extensions accepted for video uploads.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm"];

/// A single uploaded file.
///
/// Exists only for the duration of one request and is never persisted.
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    /// Original filename as sent by the client.
    pub filename: String,
    /// Raw file bytes.
    pub data: Vec<u8>,
}

/// Kind of an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
        }
    }

    /// Filename extensions allowed for this kind.
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            AssetKind::Image => IMAGE_EXTENSIONS,
            AssetKind::Video => VIDEO_EXTENSIONS,
        }
    }

    /// Returns true if the filename carries an extension allowed for this kind.
    pub fn allows(&self, filename: &str) -> bool {
        match extension(filename) {
            Some(ext) => self.allowed_extensions().contains(&ext.as_str()),
            None => false,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(AssetKind::Image),
            "video" => Ok(AssetKind::Video),
            _ => Err(format!("Unknown asset kind: {s}")),
        }
    }
}

/// Lowercased extension of a filename, if it has one.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_parsing() {
        assert_eq!(extension("photo.PNG"), Some("png".to_string()));
        assert_eq!(extension("clip.tar.mp4"), Some("mp4".to_string()));
        assert_eq!(extension("noext"), None);
        assert_eq!(extension("trailing."), Some(String::new()));
    }

    #[test]
    fn test_allows_by_kind() {
        assert!(AssetKind::Image.allows("photo.jpg"));
        assert!(AssetKind::Image.allows("photo.WEBP"));
        assert!(!AssetKind::Image.allows("clip.mp4"));
        assert!(!AssetKind::Image.allows("photo"));

        assert!(AssetKind::Video.allows("clip.mkv"));
        assert!(!AssetKind::Video.allows("photo.png"));
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&AssetKind::Image).unwrap(),
            "\"image\""
        );
        assert_eq!(
            serde_json::to_string(&AssetKind::Video).unwrap(),
            "\"video\""
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("image".parse::<AssetKind>().unwrap(), AssetKind::Image);
        assert_eq!("VIDEO".parse::<AssetKind>().unwrap(), AssetKind::Video);
        assert!("audio".parse::<AssetKind>().is_err());
    }
}
