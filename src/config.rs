//! Application configuration.
//!
//! Centralized configuration for the Firewatch frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The Firewatch detection server.
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Application name, used in page chrome.
pub const APP_NAME: &str = "Firewatch";

/// Maximum file size for upload (in bytes).
///
/// 50 MiB limit.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// How long a notification stays on screen (in milliseconds).
pub const NOTIFICATION_LIFETIME_MS: u32 = 3_000;

// =============================================================================
// Detection endpoints
// =============================================================================

/// Image detection endpoint (also serves fall detection).
pub const DETECT_IMAGE_ENDPOINT: &str = "/detect-image";

/// Video detection endpoint.
pub const DETECT_VIDEO_ENDPOINT: &str = "/detect-video";

/// Dedicated fire scan endpoint (accepts images and videos).
pub const FIRE_SCAN_ENDPOINT: &str = "/fire-scan";

/// Multipart field name expected by [`DETECT_IMAGE_ENDPOINT`].
pub const IMAGE_FIELD: &str = "image";

/// Multipart field name expected by [`DETECT_VIDEO_ENDPOINT`].
pub const VIDEO_FIELD: &str = "video";

/// Multipart field name expected by [`FIRE_SCAN_ENDPOINT`].
pub const MEDIA_FIELD: &str = "media";

// =============================================================================
// MIME allow-lists
// =============================================================================

/// Accepted image types for upload forms.
pub const IMAGE_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Accepted video types for upload forms.
pub const VIDEO_MIME_TYPES: &[&str] = &[
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/mkv",
    "video/webm",
];

/// Accepted media types for the fire scan form (images or videos).
pub const FIRE_SCAN_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/mkv",
    "video/webm",
];

// =============================================================================
// Threat level sentinels
// =============================================================================

/// `fire_threat_level` value reported when fire or smoke was found.
pub const FIRE_DETECTED_LABEL: &str = "FIRE DETECTED";

/// `fire_threat_level` value reported when the scanned area is safe.
pub const SAFE_LABEL: &str = "SAFE";
