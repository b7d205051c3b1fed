//! Detection verdicts and score normalization.

use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::asset::AssetKind;

/// Score assumed when the upstream response omits a field.
const DEFAULT_SCORE: f64 = 0.5;

/// Range the fallback fake score is mapped into.
const FALLBACK_MIN: f64 = 0.1;
const FALLBACK_MAX: f64 = 0.9;

/// Real/fake verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Returns the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized detection result for a single upload.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionVerdict {
    pub label: Label,
    pub confidence: f64,
    pub fake_score: f64,
    pub real_score: f64,
    pub kind: AssetKind,
    /// Raw upstream response, or the synthetic fallback payload.
    pub raw: serde_json::Value,
}

impl DetectionVerdict {
    /// Build a verdict from explicit scores.
    ///
    /// `label` is Fake iff `fake_score > real_score`; `confidence` is the
    /// score matching the label. Scores are taken as-is; `fake + real == 1.0`
    /// is a convention of the upstream service, not enforced here.
    pub fn from_scores(
        kind: AssetKind,
        fake_score: f64,
        real_score: f64,
        raw: serde_json::Value,
    ) -> Self {
        let (label, confidence) = if fake_score > real_score {
            (Label::Fake, fake_score)
        } else {
            (Label::Real, real_score)
        };

        Self {
            label,
            confidence,
            fake_score,
            real_score,
            kind,
            raw,
        }
    }

    /// Build a verdict from an upstream response body.
    ///
    /// Missing `fake_score`/`real_score` keys default to 0.5 each, so schema
    /// drift degrades to an uncertain verdict instead of an error.
    pub fn from_remote(kind: AssetKind, raw: serde_json::Value) -> Self {
        let fake_score = score_field(&raw, "fake_score");
        let real_score = score_field(&raw, "real_score");
        Self::from_scores(kind, fake_score, real_score, raw)
    }

    /// Build a deterministic placeholder verdict from the input bytes.
    ///
    /// Used when the upstream call fails. Identical bytes always map to the
    /// same scores. The payload is tagged `fallback: true` and carries the
    /// upstream error message. This is a placeholder, not a detection
    /// mechanism.
    pub fn fallback(kind: AssetKind, data: &[u8], error: &str) -> Self {
        let fake_score = fallback_fake_score(data);
        let real_score = 1.0 - fake_score;

        let raw = json!({
            "fake_score": fake_score,
            "real_score": real_score,
            "fallback": true,
            "error": error,
        });

        Self::from_scores(kind, fake_score, real_score, raw)
    }
}

fn score_field(raw: &serde_json::Value, key: &str) -> f64 {
    raw.get(key).and_then(|v| v.as_f64()).unwrap_or(DEFAULT_SCORE)
}

/// Map a SHA-256 digest of the bytes into [0.1, 0.9].
///
/// Only needs to be stable for equal input; the digest-to-score mapping
/// carries no meaning.
fn fallback_fake_score(data: &[u8]) -> f64 {
    let digest = Sha256::digest(data);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let x = u64::from_be_bytes(prefix);

    FALLBACK_MIN + (FALLBACK_MAX - FALLBACK_MIN) * (x as f64 / u64::MAX as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serde() {
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"FAKE\"");
        assert_eq!(serde_json::to_string(&Label::Real).unwrap(), "\"REAL\"");
    }

    #[test]
    fn test_from_scores_label_rule() {
        let v = DetectionVerdict::from_scores(AssetKind::Image, 0.8, 0.2, json!({}));
        assert_eq!(v.label, Label::Fake);
        assert_eq!(v.confidence, 0.8);

        let v = DetectionVerdict::from_scores(AssetKind::Image, 0.3, 0.7, json!({}));
        assert_eq!(v.label, Label::Real);
        assert_eq!(v.confidence, 0.7);

        // Tie goes to REAL
        let v = DetectionVerdict::from_scores(AssetKind::Video, 0.5, 0.5, json!({}));
        assert_eq!(v.label, Label::Real);
        assert_eq!(v.confidence, 0.5);
    }

    #[test]
    fn test_from_remote_defaults() {
        let v = DetectionVerdict::from_remote(AssetKind::Image, json!({}));
        assert_eq!(v.fake_score, 0.5);
        assert_eq!(v.real_score, 0.5);
        assert_eq!(v.label, Label::Real);

        let v = DetectionVerdict::from_remote(AssetKind::Image, json!({ "fake_score": 0.9 }));
        assert_eq!(v.fake_score, 0.9);
        assert_eq!(v.real_score, 0.5);
        assert_eq!(v.label, Label::Fake);
        assert_eq!(v.confidence, 0.9);
    }

    #[test]
    fn test_from_remote_keeps_raw_payload() {
        let raw = json!({ "fake_score": 0.6, "real_score": 0.4, "request_id": "abc" });
        let v = DetectionVerdict::from_remote(AssetKind::Video, raw.clone());
        assert_eq!(v.raw, raw);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let a = DetectionVerdict::fallback(AssetKind::Image, b"same bytes", "boom");
        let b = DetectionVerdict::fallback(AssetKind::Image, b"same bytes", "boom");
        assert_eq!(a.fake_score, b.fake_score);
        assert_eq!(a.real_score, b.real_score);
        assert_eq!(a.label, b.label);

        let c = DetectionVerdict::fallback(AssetKind::Image, b"other bytes", "boom");
        assert_ne!(a.fake_score, c.fake_score);
    }

    #[test]
    fn test_fallback_scores_in_range() {
        for data in [&b"a"[..], &b"bb"[..], &b"ccc"[..], &b"\x00\x01\x02"[..]] {
            let v = DetectionVerdict::fallback(AssetKind::Video, data, "err");
            assert!(v.fake_score >= FALLBACK_MIN && v.fake_score <= FALLBACK_MAX);
            assert!((v.fake_score + v.real_score - 1.0).abs() < 1e-9);
            // Label must match the larger score
            if v.fake_score > v.real_score {
                assert_eq!(v.label, Label::Fake);
            } else {
                assert_eq!(v.label, Label::Real);
            }
        }
    }

    #[test]
    fn test_fallback_payload_shape() {
        let v = DetectionVerdict::fallback(AssetKind::Image, b"x", "upstream down");
        assert_eq!(v.raw["fallback"], true);
        assert_eq!(v.raw["error"], "upstream down");
        assert_eq!(v.raw["fake_score"].as_f64().unwrap(), v.fake_score);
    }
}
