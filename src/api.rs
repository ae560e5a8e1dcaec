//! HTTP client for the CiviBase REST API.
//!
//! Wraps a `reqwest::Client` with the configured base URL, bearer-token
//! attachment, and the backend's error payload handling. One method per
//! consumed endpoint; all payloads are JSON.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Credentials posted to the login endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
    /// Optional role selector, omitted from the payload when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Response to a successful login or OTP resend.
///
/// Carries the temporary token that the OTP verification step consumes.
#[derive(Clone, Debug, Deserialize)]
pub struct OtpChallenge {
    /// Server notice, e.g. "OTP sent to your email."
    pub detail: String,
    /// Intermediate credential for the OTP step
    pub temp_token: String,
}

/// Token envelope for the OTP endpoints.
///
/// Verification sends both fields; resend sends only the temporary token.
#[derive(Debug, Serialize)]
pub struct OtpTokens {
    pub temp_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct OtpRequest {
    tokens: OtpTokens,
}

/// Credential pair issued on OTP success.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
struct RefreshRequest {
    refresh: String,
}

/// Response to a successful token refresh.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshedAccess {
    /// Replacement access token
    pub access: String,
}

/// Profile payload posted to the registration endpoint.
///
/// All fields are opaque to the client; validation happens server-side.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegistrationRequest {
    pub fullname: String,
    pub username: String,
    pub user_email: String,
    pub password: String,
    pub role: String,
    pub grade: String,
    pub division: String,
}

#[derive(Debug, Serialize)]
struct PasswordResetRequest {
    email: String,
}

/// Payload posted to the password reset confirmation endpoint.
///
/// `uid` and `token` come from the reset link path; the server checks that
/// the two passwords match.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordResetConfirmRequest {
    pub uid: String,
    pub token: String,
    pub new_password1: String,
    pub new_password2: String,
}

#[derive(Debug, Serialize)]
struct LogoutRequest {
    refresh_token: String,
}

/// Generic `{detail}` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct Detail {
    pub detail: String,
}

/// HTTP client for the CiviBase backend.
///
/// Cheap to clone; shared through the component tree as context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client for the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Probes connectivity by fetching the configured probe URL.
    ///
    /// Used to short-circuit form submissions when the network is down.
    pub async fn is_online(&self) -> bool {
        match self.http.get(&self.config.probe_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::warn!("connectivity probe failed: {error}");
                false
            }
        }
    }

    /// Posts `body` as JSON and maps non-2xx responses to [`ApiError`].
    async fn post(
        &self,
        url: String,
        body: &impl Serialize,
        bearer: Option<&str>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.post(&url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Failure payloads are {field: [messages]} or {detail: message};
        // a body that is not JSON still maps to a status-code message.
        let payload: Value = response.json().await.unwrap_or(Value::Null);
        tracing::warn!("request to {url} rejected with status {status}");
        Err(ApiError::rejected(status, &payload))
    }

    /// Posts `body` and decodes the success response as JSON.
    async fn post_json<R: DeserializeOwned>(
        &self,
        url: String,
        body: &impl Serialize,
        bearer: Option<&str>,
    ) -> Result<R, ApiError> {
        Ok(self.post(url, body, bearer).await?.json().await?)
    }

    /// Posts credentials; 200 returns the OTP challenge.
    pub async fn login(&self, request: &LoginRequest) -> Result<OtpChallenge, ApiError> {
        self.post_json(self.config.login_url(), request, None).await
    }

    /// Posts the full registration profile; 201 on success.
    ///
    /// The created profile echoed in the body is not used by the client.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        self.post(self.config.register_url(), request, None).await?;
        Ok(())
    }

    /// Exchanges the temporary token plus entered code for the session pair.
    pub async fn verify_otp(
        &self,
        temp_token: &str,
        otp_token: &str,
    ) -> Result<SessionTokens, ApiError> {
        let request = OtpRequest {
            tokens: OtpTokens {
                temp_token: temp_token.to_string(),
                otp_token: Some(otp_token.to_string()),
            },
        };
        self.post_json(self.config.verify_otp_url(), &request, None)
            .await
    }

    /// Requests a fresh OTP challenge for the given temporary token.
    pub async fn resend_otp(&self, temp_token: &str) -> Result<OtpChallenge, ApiError> {
        let request = OtpRequest {
            tokens: OtpTokens {
                temp_token: temp_token.to_string(),
                otp_token: None,
            },
        };
        self.post_json(self.config.resend_otp_url(), &request, None)
            .await
    }

    /// Exchanges the refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, ApiError> {
        let request = RefreshRequest {
            refresh: refresh_token.to_string(),
        };
        self.post_json(self.config.token_refresh_url(), &request, None)
            .await
    }

    /// Requests an out-of-band password reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<Detail, ApiError> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        self.post_json(self.config.password_reset_url(), &request, None)
            .await
    }

    /// Confirms a password reset with the link-embedded uid and token.
    pub async fn confirm_password_reset(
        &self,
        request: &PasswordResetConfirmRequest,
    ) -> Result<Detail, ApiError> {
        self.post_json(self.config.password_reset_confirm_url(), request, None)
            .await
    }

    /// Invalidates the refresh token server-side.
    ///
    /// The backend answers this with a bodyless 204, so the response body is
    /// ignored; any 2xx counts as success.
    pub async fn logout(
        &self,
        refresh_token: &str,
        access_token: Option<&str>,
    ) -> Result<(), ApiError> {
        let request = LogoutRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.post(self.config.logout_url(), &request, access_token)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_omits_unset_role() {
        let request = LoginRequest {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
            role: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"username": "jdoe", "password": "hunter2"}));
    }

    #[test]
    fn test_login_request_includes_role_when_set() {
        let request = LoginRequest {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
            role: Some("ADMINISTRATOR".to_string()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["role"], "ADMINISTRATOR");
    }

    #[test]
    fn test_verify_payload_nests_both_tokens() {
        let request = OtpRequest {
            tokens: OtpTokens {
                temp_token: "otp_token:abc".to_string(),
                otp_token: Some("123456".to_string()),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"tokens": {"temp_token": "otp_token:abc", "otp_token": "123456"}})
        );
    }

    #[test]
    fn test_resend_payload_nests_temp_token_only() {
        let request = OtpRequest {
            tokens: OtpTokens {
                temp_token: "otp_token:abc".to_string(),
                otp_token: None,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"tokens": {"temp_token": "otp_token:abc"}}));
    }

    #[test]
    fn test_refresh_payload_shape() {
        let request = RefreshRequest {
            refresh: "refresh-token".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"refresh": "refresh-token"}));
    }

    #[test]
    fn test_otp_challenge_deserialization() {
        let json = r#"{"detail": "OTP sent to your email.", "temp_token": "otp_token:abc"}"#;

        let challenge: OtpChallenge = serde_json::from_str(json).unwrap();
        assert_eq!(challenge.detail, "OTP sent to your email.");
        assert_eq!(challenge.temp_token, "otp_token:abc");
    }

    #[test]
    fn test_session_tokens_deserialization() {
        let json = r#"{"access_token": "a.b.c", "refresh_token": "d.e.f"}"#;

        let tokens: SessionTokens = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.access_token, "a.b.c");
        assert_eq!(tokens.refresh_token, "d.e.f");
    }

    #[test]
    fn test_refreshed_access_deserialization() {
        let json = r#"{"access": "new.access.token"}"#;

        let refreshed: RefreshedAccess = serde_json::from_str(json).unwrap();
        assert_eq!(refreshed.access, "new.access.token");
    }

    #[test]
    fn test_registration_payload_field_names() {
        let request = RegistrationRequest {
            fullname: "Jane Doe".to_string(),
            username: "jdoe".to_string(),
            user_email: "jane@civibase.example".to_string(),
            password: "hunter2".to_string(),
            role: "STANDARD USER".to_string(),
            grade: "G7".to_string(),
            division: "Records".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["fullname"], "Jane Doe");
        assert_eq!(value["user_email"], "jane@civibase.example");
        assert_eq!(value["division"], "Records");
    }

    #[test]
    fn test_confirm_payload_field_names() {
        let request = PasswordResetConfirmRequest {
            uid: "MQ".to_string(),
            token: "set-password-token".to_string(),
            new_password1: "first".to_string(),
            new_password2: "second".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["uid"], "MQ");
        assert_eq!(value["new_password1"], "first");
        assert_eq!(value["new_password2"], "second");
    }

    #[test]
    fn test_client_exposes_config() {
        let client = ApiClient::new(ApiConfig::new("https://api.civibase.example"));
        assert_eq!(client.config().base_url, "https://api.civibase.example");
    }
}
