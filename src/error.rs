//! Error handling for API calls.
//!
//! The backend reports failures either as `{field: [messages]}` validation
//! maps or as `{detail: message}` documents. Both shapes are flattened into
//! a plain list of human-readable messages so pages can surface them as an
//! inline notice. No failure is fatal; every error is recoverable by user
//! retry.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Notice shown when the connectivity probe fails before a submission.
pub const OFFLINE_NOTICE: &str =
    "Network issue detected. Please ensure you are connected to the internet and try again.";

/// Error types for API call failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The connectivity probe failed before the request was sent
    #[error("Network issue detected. Please ensure you are connected to the internet and try again.")]
    Offline,

    /// The request could not be completed (DNS, connection, body decode)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the request with an error payload
    #[error("{}", .messages.join(" "))]
    Rejected {
        /// HTTP status of the rejection
        status: StatusCode,
        /// Flattened messages from the error payload
        messages: Vec<String>,
    },

    /// An OTP step was attempted without a stored temporary token
    #[error("Your session has expired. Please start the login process again.")]
    ChallengeExpired,
}

impl ApiError {
    /// Builds a `Rejected` error from a response status and error payload.
    ///
    /// Falls back to a status-code message when the payload carries no
    /// string leaves.
    pub fn rejected(status: StatusCode, payload: &Value) -> Self {
        let mut messages = extract_error_messages(payload);
        if messages.is_empty() {
            messages.push(format!("request rejected with status {status}"));
        }

        ApiError::Rejected { status, messages }
    }

    /// Returns the HTTP status for `Rejected` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Collects every string leaf of an error payload.
///
/// Handles both backend error shapes (`{field: [messages]}` and
/// `{detail: message}`) as well as arbitrarily nested combinations; non-string
/// leaves are ignored.
pub fn extract_error_messages(payload: &Value) -> Vec<String> {
    let mut messages = Vec::new();
    collect_strings(payload, &mut messages);
    messages
}

fn collect_strings(value: &Value, messages: &mut Vec<String>) {
    match value {
        Value::String(message) => messages.push(message.clone()),
        Value::Array(items) => {
            for item in items {
                collect_strings(item, messages);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_strings(item, messages);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_from_detail_shape() {
        let payload = json!({"detail": "Invalid credentials."});
        assert_eq!(extract_error_messages(&payload), vec!["Invalid credentials."]);
    }

    #[test]
    fn test_extract_from_field_map_shape() {
        let payload = json!({
            "username": ["A user with that username already exists."],
            "email": ["Enter a valid email address.", "This field is required."]
        });

        let messages = extract_error_messages(&payload);
        assert_eq!(messages.len(), 3);
        assert!(messages.contains(&"A user with that username already exists.".to_string()));
        assert!(messages.contains(&"Enter a valid email address.".to_string()));
    }

    #[test]
    fn test_extract_ignores_non_string_leaves() {
        let payload = json!({"code": 400, "valid": false, "detail": "Bad request."});
        assert_eq!(extract_error_messages(&payload), vec!["Bad request."]);
    }

    #[test]
    fn test_extract_from_nested_payload() {
        let payload = json!({"tokens": {"otp_token": ["This field is required."]}});
        assert_eq!(
            extract_error_messages(&payload),
            vec!["This field is required."]
        );
    }

    #[test]
    fn test_extract_from_empty_payload() {
        assert!(extract_error_messages(&Value::Null).is_empty());
        assert!(extract_error_messages(&json!({})).is_empty());
    }

    #[test]
    fn test_rejected_joins_messages() {
        let payload = json!({"detail": "Token expired or invalid."});
        let error = ApiError::rejected(StatusCode::BAD_REQUEST, &payload);

        assert_eq!(error.to_string(), "Token expired or invalid.");
        assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_rejected_falls_back_to_status() {
        let error = ApiError::rejected(StatusCode::SERVICE_UNAVAILABLE, &Value::Null);

        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn test_offline_uses_fixed_notice() {
        assert_eq!(ApiError::Offline.to_string(), OFFLINE_NOTICE);
        assert!(ApiError::Offline.status().is_none());
    }
}
