//! HTTP service for submitting media to the detection API.
//!
//! One submission is one multipart POST: the selected file plus any
//! auxiliary form fields, validated client-side before anything touches
//! the network. The response is parsed into a [`DetectionResult`] and
//! interpreted into exactly one user-facing notification.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::MAX_UPLOAD_BYTES;
use crate::types::{DetectError, DetectionResult, FireThreat, Severity};

/// A single upload bound for a detection endpoint.
///
/// Carries everything the submission needs: where to post, under which
/// multipart field the file goes, the auxiliary fields, and the
/// validation constraints (allow-list, size ceiling).
#[derive(Clone, Debug)]
pub struct UploadRequest {
    /// Endpoint path, e.g. "/detect-image"
    pub endpoint: &'static str,
    /// Multipart field name the backend reads the file from
    pub field_name: &'static str,
    /// The selected browser file
    pub file: File,
    /// Auxiliary string fields appended to the form body
    pub fields: Vec<(String, String)>,
    /// MIME types accepted for this upload
    pub allowed: &'static [&'static str],
    /// Maximum accepted file size in bytes
    pub max_bytes: u64,
}

impl UploadRequest {
    /// Create a request with the default 50 MiB size ceiling.
    pub fn new(
        endpoint: &'static str,
        field_name: &'static str,
        file: File,
        allowed: &'static [&'static str],
    ) -> Self {
        Self {
            endpoint,
            field_name,
            file,
            fields: Vec::new(),
            allowed,
            max_bytes: MAX_UPLOAD_BYTES,
        }
    }

    /// Append an auxiliary form field (e.g. `use_fire=true`).
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Override the size ceiling.
    pub fn with_limit(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

/// Validate a file before upload.
///
/// Fail-fast: both checks run locally and cost nothing on the network.
pub fn validate_upload(
    mime: &str,
    size: u64,
    allowed: &[&str],
    limit: u64,
) -> Result<(), DetectError> {
    if !allowed.contains(&mime) {
        return Err(DetectError::InvalidFileType {
            found: mime.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        });
    }

    if size > limit {
        return Err(DetectError::FileTooLarge { size, limit });
    }

    Ok(())
}

/// Upload the file and parse the detection result.
///
/// Validates first, then assembles the multipart body and POSTs it.
/// A non-success status becomes [`DetectError::RemoteRejected`] with the
/// server's `{"error": ...}` message when the body parses, a transport
/// failure becomes [`DetectError::Transport`], and an unparsable success
/// body becomes [`DetectError::MalformedResponse`].
pub async fn submit_detection(
    request: &UploadRequest,
    backend_url: &str,
) -> Result<DetectionResult, DetectError> {
    validate_upload(
        &request.file.type_(),
        request.file.size() as u64,
        request.allowed,
        request.max_bytes,
    )?;

    let form_data = FormData::new()
        .map_err(|e| DetectError::Transport(format!("Failed to create form data: {:?}", e)))?;

    form_data
        .append_with_blob(request.field_name, &request.file)
        .map_err(|e| DetectError::Transport(format!("Failed to append file: {:?}", e)))?;

    for (key, value) in &request.fields {
        form_data
            .append_with_str(key, value)
            .map_err(|e| DetectError::Transport(format!("Failed to append field: {:?}", e)))?;
    }

    let url = format!("{}{}", backend_url, request.endpoint);
    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| DetectError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| DetectError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(remote_rejection(status, &body));
    }

    response
        .json::<DetectionResult>()
        .await
        .map_err(|e| DetectError::MalformedResponse(e.to_string()))
}

/// Turn a non-success response into a rejection error.
///
/// Prefers the server's structured error message; falls back to the
/// status code when the body is not the expected JSON.
fn remote_rejection(status: u16, body: &str) -> DetectError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => DetectError::RemoteRejected(parsed.error),
        Err(_) => DetectError::RemoteRejected(format!("HTTP error, status {}", status)),
    }
}

// =============================================================================
// Feedback dispatch
// =============================================================================

/// How a form interprets its detection result.
///
/// One controller per form: fire-oriented forms read the threat label,
/// the fall detection form reads the `fall_detected` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Notify on the `fire_threat_level` label.
    FireThreat,
    /// Notify on the `fall_detected` flag.
    Fall,
}

/// Compute the single notification a successful response produces.
///
/// In fall mode a missing `fall_detected` flag is an error, never
/// silently treated as "no fall".
pub fn feedback_for(
    mode: Feedback,
    result: &DetectionResult,
) -> Result<(Severity, String), DetectError> {
    match mode {
        Feedback::FireThreat => Ok(match result.fire_threat() {
            Some(FireThreat::Detected) => (
                Severity::Danger,
                "🚨 FIRE DETECTED! Check results below.".to_string(),
            ),
            Some(FireThreat::Safe) => (
                Severity::Success,
                "✅ No fire detected - Area is safe.".to_string(),
            ),
            Some(FireThreat::Unrecognized) | None => (
                Severity::Success,
                "✅ Analysis completed successfully.".to_string(),
            ),
        }),
        Feedback::Fall => match result.fall_detected {
            Some(true) => Ok((
                Severity::Danger,
                "🚨 FALL DETECTED! Check results below.".to_string(),
            )),
            Some(false) => Ok((
                Severity::Success,
                "✅ No fall detected - Area is safe.".to_string(),
            )),
            None => Err(DetectError::MalformedResponse(
                "response is missing the fall_detected flag".to_string(),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES};
    use serde_json::json;

    fn result_from(value: serde_json::Value) -> DetectionResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn validation_rejects_types_outside_the_allow_list() {
        let err = validate_upload("application/pdf", 1024, IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES)
            .unwrap_err();
        assert!(matches!(err, DetectError::InvalidFileType { .. }));

        // An empty declared type is just as invalid.
        let err = validate_upload("", 1024, IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES).unwrap_err();
        assert!(matches!(err, DetectError::InvalidFileType { .. }));
    }

    #[test]
    fn validation_rejects_oversized_files() {
        let err = validate_upload(
            "image/png",
            MAX_UPLOAD_BYTES + 1,
            IMAGE_MIME_TYPES,
            MAX_UPLOAD_BYTES,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DetectError::FileTooLarge {
                size: MAX_UPLOAD_BYTES + 1,
                limit: MAX_UPLOAD_BYTES,
            }
        );
    }

    #[test]
    fn validation_accepts_allowed_types_within_the_limit() {
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES, IMAGE_MIME_TYPES, MAX_UPLOAD_BYTES)
            .is_ok());
    }

    #[test]
    fn fire_detected_label_raises_a_danger_notification() {
        let result = result_from(json!({"fire_threat_level": "FIRE DETECTED"}));
        let (severity, message) = feedback_for(Feedback::FireThreat, &result).unwrap();
        assert_eq!(severity, Severity::Danger);
        assert!(message.contains("FIRE DETECTED"));
    }

    #[test]
    fn safe_label_raises_a_success_notification() {
        let result = result_from(json!({"fire_threat_level": "SAFE"}));
        let (severity, _) = feedback_for(Feedback::FireThreat, &result).unwrap();
        assert_eq!(severity, Severity::Success);
    }

    #[test]
    fn other_responses_raise_a_generic_success_notification() {
        for body in [json!({"fire_threat_level": "ELEVATED"}), json!({"objects_detected": {}})] {
            let result = result_from(body);
            let (severity, message) = feedback_for(Feedback::FireThreat, &result).unwrap();
            assert_eq!(severity, Severity::Success);
            assert!(message.contains("completed"));
        }
    }

    #[test]
    fn fall_flag_drives_the_fall_notification() {
        let fell = result_from(json!({"fall_detected": true}));
        let (severity, _) = feedback_for(Feedback::Fall, &fell).unwrap();
        assert_eq!(severity, Severity::Danger);

        let steady = result_from(json!({"fall_detected": false}));
        let (severity, _) = feedback_for(Feedback::Fall, &steady).unwrap();
        assert_eq!(severity, Severity::Success);
    }

    #[test]
    fn missing_fall_flag_is_a_malformed_response() {
        let result = result_from(json!({"person_count": 1}));
        let err = feedback_for(Feedback::Fall, &result).unwrap_err();
        assert!(matches!(err, DetectError::MalformedResponse(_)));
    }

    #[test]
    fn rejection_uses_the_server_supplied_message() {
        assert_eq!(
            remote_rejection(400, r#"{"error":"bad input"}"#),
            DetectError::RemoteRejected("bad input".to_string())
        );
    }

    #[test]
    fn rejection_falls_back_to_the_status_code() {
        assert_eq!(
            remote_rejection(500, "<html>Internal Server Error</html>"),
            DetectError::RemoteRejected("HTTP error, status 500".to_string())
        );
    }
}
