//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Notification Types** - transient user feedback
//! - **API Types** - detection service response structures
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{FIRE_DETECTED_LABEL, SAFE_LABEL};

// =============================================================================
// Notification Types
// =============================================================================

/// Notification severity level.
///
/// Determines the visual style of the notification toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Neutral informational message
    Info,
    /// Successful operation or safe outcome
    Success,
    /// A submission failed (validation, transport, rejection)
    Error,
    /// A hazard was detected
    Danger,
}

impl Severity {
    /// Get CSS class suffix for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Danger => "danger",
        }
    }
}

/// A transient user-visible message.
///
/// Created on demand by the [`Notifier`](crate::Notifier) and removed
/// from the display surface once its lifetime elapses.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Unique id within the sink, used as the render key
    pub id: u64,
    /// Severity level
    pub severity: Severity,
    /// Message text
    pub message: String,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from a detection endpoint.
///
/// Only the fields the frontend reacts to are modeled; everything else
/// the server sends (detection counts, threat details, timestamps, ...)
/// is kept in `extra` and passed through unchanged to the results panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Fire threat label, e.g. "FIRE DETECTED" or "SAFE"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_threat_level: Option<String>,
    /// Whether a fall was detected in the submitted image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall_detected: Option<bool>,
    /// Unrecognized response fields, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Interpreted fire threat level.
///
/// Typed view over [`DetectionResult::fire_threat_level`] so call sites
/// match on variants instead of comparing raw strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireThreat {
    /// Fire or smoke was found
    Detected,
    /// No fire or smoke in the scanned media
    Safe,
    /// The server sent a label this frontend does not know
    Unrecognized,
}

impl DetectionResult {
    /// Interpret the fire threat label, if the response carried one.
    pub fn fire_threat(&self) -> Option<FireThreat> {
        self.fire_threat_level.as_deref().map(|label| match label {
            FIRE_DETECTED_LABEL => FireThreat::Detected,
            SAFE_LABEL => FireThreat::Safe,
            _ => FireThreat::Unrecognized,
        })
    }
}

/// A completed detection run, kept for the results panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOutcome {
    /// Label of the form that produced this result
    pub source: String,
    /// Local completion time (HH:MM:SS)
    pub completed_at: String,
    /// The parsed server response
    pub result: DetectionResult,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised by the submission flow.
///
/// The first two are local and reported before any network transmission
/// is attempted. The rest map the possible failure points of one
/// request/response exchange.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DetectError {
    /// File type outside the form's allow-list.
    #[error("Invalid file type: {found}. Allowed: {}", .allowed.join(", "))]
    InvalidFileType { found: String, allowed: Vec<String> },

    /// File larger than the configured ceiling.
    #[error("File too large: {}. Maximum size: {}", format_bytes(*.size), format_bytes(*.limit))]
    FileTooLarge { size: u64, limit: u64 },

    /// No response arrived (network failure, refused connection, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    /// Carries the server-supplied message, or a status-derived one
    /// when the body was unparsable.
    #[error("{0}")]
    RemoteRejected(String),

    /// The response body was not a usable detection result.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

// =============================================================================
// Formatting helpers
// =============================================================================

/// Render a byte count with binary units (B, KiB, MiB, GiB).
///
/// Trailing zeros are trimmed: 50 MiB renders as "50 MiB", not "50.00 MiB".
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = ((63 - bytes.leading_zeros() as u64) / 10).min(UNITS.len() as u64 - 1);
    let value = bytes as f64 / (1u64 << (10 * exponent)) as f64;

    let mut rendered = format!("{:.2}", value);
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }

    format!("{} {}", rendered, UNITS[exponent as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detection_result_keeps_unrecognized_keys() {
        let body = json!({
            "fire_threat_level": "SAFE",
            "person_count": 3,
            "detections": {"persons": 3},
            "timestamp": 1700000000.0
        });

        let result: DetectionResult = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(result.fire_threat_level.as_deref(), Some("SAFE"));
        assert_eq!(result.fall_detected, None);
        assert_eq!(result.extra.get("person_count"), Some(&json!(3)));

        // Round-trips unchanged, extras included.
        assert_eq!(serde_json::to_value(&result).unwrap(), body);
    }

    #[test]
    fn fire_threat_maps_sentinel_labels() {
        let detected: DetectionResult =
            serde_json::from_value(json!({"fire_threat_level": "FIRE DETECTED"})).unwrap();
        assert_eq!(detected.fire_threat(), Some(FireThreat::Detected));

        let safe: DetectionResult =
            serde_json::from_value(json!({"fire_threat_level": "SAFE"})).unwrap();
        assert_eq!(safe.fire_threat(), Some(FireThreat::Safe));

        let odd: DetectionResult =
            serde_json::from_value(json!({"fire_threat_level": "MAYBE"})).unwrap();
        assert_eq!(odd.fire_threat(), Some(FireThreat::Unrecognized));

        let silent: DetectionResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(silent.fire_threat(), None);
    }

    #[test]
    fn format_bytes_uses_binary_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(50 * 1024 * 1024), "50 MiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3 GiB");
    }

    #[test]
    fn errors_render_human_readable_messages() {
        let too_large = DetectError::FileTooLarge {
            size: 60 * 1024 * 1024,
            limit: 50 * 1024 * 1024,
        };
        assert_eq!(
            too_large.to_string(),
            "File too large: 60 MiB. Maximum size: 50 MiB"
        );

        let bad_type = DetectError::InvalidFileType {
            found: "application/pdf".to_string(),
            allowed: vec!["image/png".to_string(), "image/jpeg".to_string()],
        };
        assert_eq!(
            bad_type.to_string(),
            "Invalid file type: application/pdf. Allowed: image/png, image/jpeg"
        );

        // The server message surfaces verbatim.
        let rejected = DetectError::RemoteRejected("bad input".to_string());
        assert_eq!(rejected.to_string(), "bad input");
    }
}
