//! JWT decoding utilities for reading the access token's claims.
//!
//! The route guard only needs the expiry claim, so the token is parsed
//! without signature verification; the backend verifies signatures on every
//! authenticated request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for access-token decoding.
#[derive(Debug, Error)]
pub enum TokenDecodeError {
    /// The token does not have the header.payload.signature shape
    #[error("invalid JWT format: must have 3 parts separated by dots")]
    Format,

    /// The payload is not valid base64url
    #[error("failed to decode base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload is not a valid claims document
    #[error("failed to parse JWT claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Claims carried by the backend's access tokens.
///
/// Only `exp` is required by the guard; the remaining fields are the
/// optional claims the backend stamps into its tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Expiration timestamp in seconds since epoch (required)
    pub exp: u64,

    /// Token kind, "access" or "refresh" (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Identifier of the authenticated user (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Unique token identifier (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Issued-at timestamp (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

/// Decodes an access token and extracts its claims.
///
/// Performs basic JWT parsing without signature verification: the guard only
/// reads the expiry claim locally and the backend remains the authority on
/// token validity.
///
/// # Arguments
///
/// * `token` - The JWT access token string
///
/// # Errors
///
/// Returns [`TokenDecodeError`] if the token is not three dot-separated
/// parts, the payload is not base64url, or the claims JSON fails to parse.
pub fn decode_access_claims(token: &str) -> Result<AccessClaims, TokenDecodeError> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();

    if parts.len() != 3 {
        tracing::error!("invalid JWT format: expected 3 parts, got {}", parts.len());
        return Err(TokenDecodeError::Format);
    }

    // Only the payload (middle part) is needed
    let decoded_bytes = URL_SAFE_NO_PAD.decode(parts[1])?;
    let claims: AccessClaims = serde_json::from_slice(&decoded_bytes)?;

    tracing::trace!(
        "decoded access token: exp={}, user_id={:?}",
        claims.exp,
        claims.user_id
    );

    Ok(claims)
}

/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{jwt_with_exp, jwt_with_payload};
    use super::*;

    #[test]
    fn test_decode_full_claims() {
        let payload = r#"{
            "token_type": "access",
            "exp": 1712000000,
            "iat": 1711999700,
            "jti": "3cc723dca6a44a0f9f6f2c9a37bd325f",
            "user_id": 42
        }"#;

        let claims = decode_access_claims(&jwt_with_payload(payload)).unwrap();

        assert_eq!(claims.exp, 1712000000);
        assert_eq!(claims.token_type.as_deref(), Some("access"));
        assert_eq!(claims.user_id, Some(42));
        assert_eq!(claims.jti.as_deref(), Some("3cc723dca6a44a0f9f6f2c9a37bd325f"));
        assert_eq!(claims.iat, Some(1711999700));
    }

    #[test]
    fn test_decode_minimal_claims() {
        let claims = decode_access_claims(&jwt_with_exp(123)).unwrap();

        assert_eq!(claims.exp, 123);
        assert!(claims.token_type.is_none());
        assert!(claims.user_id.is_none());
    }

    #[test]
    fn test_decode_rejects_wrong_part_count() {
        let result = decode_access_claims("not.a.valid.jwt.format");
        assert!(matches!(result, Err(TokenDecodeError::Format)));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode_access_claims("header.!@#$%^&*().signature");
        assert!(matches!(result, Err(TokenDecodeError::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let result = decode_access_claims(&jwt_with_payload("not valid json"));
        assert!(matches!(result, Err(TokenDecodeError::Claims(_))));
    }

    #[test]
    fn test_decode_rejects_missing_exp() {
        let result = decode_access_claims(&jwt_with_payload(r#"{"user_id":42}"#));
        assert!(matches!(result, Err(TokenDecodeError::Claims(_))));
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        // Should be a reasonable timestamp (after 2020)
        assert!(current_timestamp() > 1_600_000_000);
    }
}
