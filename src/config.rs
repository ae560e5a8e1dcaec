//! API configuration for the CiviBase backend.
//!
//! This module provides the configuration for the REST API consumed by the
//! client: the base URL every endpoint is joined onto, and the URL used by
//! the connectivity probe. Endpoint paths themselves are fixed constants;
//! only the base is configurable.

use serde::{Deserialize, Serialize};

/// Default probe target for the connectivity pre-check.
const DEFAULT_PROBE_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Development fallback when no API base URL is configured.
const DEV_BASE_URL: &str = "http://localhost:8000";

/// Configuration for the CiviBase REST API.
///
/// # Fields
///
/// - `base_url`: root of the backend (e.g., "https://api.civibase.example")
/// - `probe_url`: target of the connectivity pre-check issued before form
///   submissions
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Root URL of the CiviBase backend.
    pub base_url: String,

    /// URL fetched by the connectivity probe.
    pub probe_url: String,
}

impl ApiConfig {
    /// Creates a new ApiConfig with the default probe target.
    ///
    /// # Example
    ///
    /// ```
    /// # use civibase_web::ApiConfig;
    /// let config = ApiConfig::new("https://api.civibase.example");
    /// assert_eq!(config.base_url, "https://api.civibase.example");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            probe_url: DEFAULT_PROBE_URL.to_string(),
        }
    }

    /// Loads ApiConfig from compile-time environment variables.
    ///
    /// Expected environment variables:
    /// - `CIVIBASE_API_BASE_URL` - root URL of the backend (required)
    /// - `CIVIBASE_PROBE_URL` - connectivity probe target (optional)
    ///
    /// Returns `None` if `CIVIBASE_API_BASE_URL` is not set at compile time.
    /// The variables are made visible to `option_env!()` by `build.rs`, which
    /// also reads them from a `.env` file when present.
    pub fn from_env() -> Option<Self> {
        let base_url = option_env!("CIVIBASE_API_BASE_URL")?;
        let probe_url = option_env!("CIVIBASE_PROBE_URL").unwrap_or(DEFAULT_PROBE_URL);

        Some(Self {
            base_url: base_url.to_string(),
            probe_url: probe_url.to_string(),
        })
    }

    /// Loads ApiConfig from the environment, falling back to a local
    /// development backend with a logged warning.
    pub fn from_env_or_dev() -> Self {
        Self::from_env().unwrap_or_else(|| {
            tracing::warn!(
                "CIVIBASE_API_BASE_URL not set, falling back to development backend {}",
                DEV_BASE_URL
            );
            Self::new(DEV_BASE_URL)
        })
    }

    /// Joins an API path onto the configured base URL.
    ///
    /// Tolerates a trailing slash on the base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Returns the registration endpoint URL.
    ///
    /// # Example
    ///
    /// ```
    /// # use civibase_web::ApiConfig;
    /// let config = ApiConfig::new("https://api.civibase.example");
    /// assert_eq!(
    ///     config.register_url(),
    ///     "https://api.civibase.example/api/register/"
    /// );
    /// ```
    pub fn register_url(&self) -> String {
        self.endpoint("api/register/")
    }

    /// Returns the login endpoint URL.
    pub fn login_url(&self) -> String {
        self.endpoint("api/login/")
    }

    /// Returns the OTP verification endpoint URL.
    pub fn verify_otp_url(&self) -> String {
        self.endpoint("api/verify-otp-token/")
    }

    /// Returns the OTP resend endpoint URL.
    pub fn resend_otp_url(&self) -> String {
        self.endpoint("api/resend-otp/")
    }

    /// Returns the access-token refresh endpoint URL.
    pub fn token_refresh_url(&self) -> String {
        self.endpoint("api/token-refresh/")
    }

    /// Returns the password reset request endpoint URL.
    pub fn password_reset_url(&self) -> String {
        self.endpoint("api/auth/password/reset/")
    }

    /// Returns the password reset confirmation endpoint URL.
    pub fn password_reset_confirm_url(&self) -> String {
        self.endpoint("api/auth/password/reset/confirm/")
    }

    /// Returns the logout endpoint URL.
    pub fn logout_url(&self) -> String {
        self.endpoint("api/logout/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_probe() {
        let config = ApiConfig::new("https://api.civibase.example");

        assert_eq!(config.base_url, "https://api.civibase.example");
        assert_eq!(config.probe_url, DEFAULT_PROBE_URL);
    }

    #[test]
    fn test_endpoint_joins_base() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.login_url(),
            "https://api.civibase.example/api/login/"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let config = ApiConfig::new("https://api.civibase.example/");
        assert_eq!(
            config.login_url(),
            "https://api.civibase.example/api/login/"
        );
    }

    #[test]
    fn test_register_url() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.register_url(),
            "https://api.civibase.example/api/register/"
        );
    }

    #[test]
    fn test_verify_otp_url() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.verify_otp_url(),
            "https://api.civibase.example/api/verify-otp-token/"
        );
    }

    #[test]
    fn test_resend_otp_url() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.resend_otp_url(),
            "https://api.civibase.example/api/resend-otp/"
        );
    }

    #[test]
    fn test_token_refresh_url() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.token_refresh_url(),
            "https://api.civibase.example/api/token-refresh/"
        );
    }

    #[test]
    fn test_password_reset_urls() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.password_reset_url(),
            "https://api.civibase.example/api/auth/password/reset/"
        );
        assert_eq!(
            config.password_reset_confirm_url(),
            "https://api.civibase.example/api/auth/password/reset/confirm/"
        );
    }

    #[test]
    fn test_logout_url() {
        let config = ApiConfig::new("https://api.civibase.example");
        assert_eq!(
            config.logout_url(),
            "https://api.civibase.example/api/logout/"
        );
    }

    #[test]
    fn test_from_env_or_dev_never_panics() {
        let config = ApiConfig::from_env_or_dev();
        assert!(!config.base_url.is_empty());
        assert!(!config.probe_url.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = ApiConfig::new("https://api.civibase.example");

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ApiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
