//! Image/video classification.

use realcheck_models::asset::{extension, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use realcheck_models::AssetKind;

use crate::error::{MediaError, MediaResult};

/// Returns true if the bytes decode as an image.
pub fn is_image_bytes(data: &[u8]) -> bool {
    image::load_from_memory(data).is_ok()
}

/// Classify an upload as image or video.
///
/// The filename extension wins when it is recognized; otherwise the bytes
/// are probed with an image decode and anything that fails the probe is
/// treated as video. No further verification is done.
pub fn classify(data: &[u8], filename: &str) -> AssetKind {
    if let Some(ext) = extension(filename) {
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return AssetKind::Image;
        }
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            return AssetKind::Video;
        }
    }

    if is_image_bytes(data) {
        AssetKind::Image
    } else {
        AssetKind::Video
    }
}

/// Check the filename extension against the allowed set for the kind.
pub fn validate_extension(kind: AssetKind, filename: &str) -> MediaResult<()> {
    if kind.allows(filename) {
        return Ok(());
    }

    Err(match kind {
        AssetKind::Image => MediaError::UnsupportedImageFormat,
        AssetKind::Video => MediaError::UnsupportedVideoFormat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a 1x1 image so the probe has real bytes to chew on.
    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_extension_wins_over_content() {
        // Extension says video, bytes say nothing parseable
        assert_eq!(classify(b"not media", "clip.mp4"), AssetKind::Video);
        // Extension says image even for undecodable bytes
        assert_eq!(classify(b"not media", "photo.jpg"), AssetKind::Image);
        assert_eq!(classify(&png_bytes(), "PHOTO.PNG"), AssetKind::Image);
    }

    #[test]
    fn test_unknown_extension_probes_content() {
        assert_eq!(classify(&png_bytes(), "download.bin"), AssetKind::Image);
        assert_eq!(classify(&png_bytes(), "noextension"), AssetKind::Image);
        assert_eq!(classify(b"\x00\x01\x02\x03", "download.bin"), AssetKind::Video);
    }

    #[test]
    fn test_probe_rejects_garbage() {
        assert!(!is_image_bytes(b""));
        assert!(!is_image_bytes(b"plain text"));
        assert!(is_image_bytes(&png_bytes()));
    }

    #[test]
    fn test_validate_extension() {
        assert!(validate_extension(AssetKind::Image, "a.png").is_ok());
        assert!(validate_extension(AssetKind::Video, "a.webm").is_ok());

        assert_eq!(
            validate_extension(AssetKind::Image, "a.bin"),
            Err(MediaError::UnsupportedImageFormat)
        );
        assert_eq!(
            validate_extension(AssetKind::Video, "a.bin"),
            Err(MediaError::UnsupportedVideoFormat)
        );
        // Classified image via probe but extension not in the image set
        assert_eq!(
            validate_extension(AssetKind::Image, "a.mp4"),
            Err(MediaError::UnsupportedImageFormat)
        );
    }
}
