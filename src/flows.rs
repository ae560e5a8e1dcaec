//! Authentication flows: login, OTP verification and resend, registration,
//! password reset, and logout.
//!
//! Each flow drives exactly one API call and returns the route to navigate
//! to on success. The session mutations are factored into synchronous apply
//! steps so the lifecycle is testable against [`MemorySession`] without a
//! network.
//!
//! [`MemorySession`]: crate::session::MemorySession

use crate::api::{
    ApiClient, LoginRequest, OtpChallenge, PasswordResetConfirmRequest, RegistrationRequest,
    SessionTokens,
};
use crate::error::ApiError;
use crate::routes::Route;
use crate::session::{SessionStore, TokenSlot};

/// Posts credentials and, on success, stores the temporary token.
///
/// Returns the OTP route for navigation.
pub async fn log_in<S: SessionStore>(
    api: &ApiClient,
    session: &mut S,
    request: &LoginRequest,
) -> Result<Route, ApiError> {
    let challenge = api.login(request).await?;
    tracing::debug!("login accepted: {}", challenge.detail);
    Ok(begin_otp_challenge(session, &challenge))
}

/// Stores the temporary token issued by the password check.
///
/// Replaces any previous temporary token; a resend reuses this to restart
/// the code's validity window.
pub fn begin_otp_challenge<S: SessionStore>(session: &mut S, challenge: &OtpChallenge) -> Route {
    session.set(TokenSlot::Temp, &challenge.temp_token);
    Route::OtpChallenge {}
}

/// Exchanges the stored temporary token plus the entered code for the
/// session credential pair.
///
/// Returns the dashboard route for navigation. Fails with
/// [`ApiError::ChallengeExpired`] when no temporary token is stored.
pub async fn verify_otp<S: SessionStore>(
    api: &ApiClient,
    session: &mut S,
    otp: &str,
) -> Result<Route, ApiError> {
    let temp_token = session
        .get(TokenSlot::Temp)
        .ok_or(ApiError::ChallengeExpired)?;

    let tokens = api.verify_otp(&temp_token, otp).await?;
    Ok(establish_session(session, &tokens))
}

/// Stores the issued credential pair and discards the consumed temporary
/// token.
pub fn establish_session<S: SessionStore>(session: &mut S, tokens: &SessionTokens) -> Route {
    session.set(TokenSlot::Access, &tokens.access_token);
    session.set(TokenSlot::Refresh, &tokens.refresh_token);
    session.remove(TokenSlot::Temp);
    Route::Dashboard {}
}

/// Requests a fresh OTP, replacing the stored temporary token.
///
/// Returns the server's notice for display.
pub async fn resend_otp<S: SessionStore>(
    api: &ApiClient,
    session: &mut S,
) -> Result<String, ApiError> {
    let temp_token = session
        .get(TokenSlot::Temp)
        .ok_or(ApiError::ChallengeExpired)?;

    let challenge = api.resend_otp(&temp_token).await?;
    session.set(TokenSlot::Temp, &challenge.temp_token);
    Ok(challenge.detail)
}

/// Posts the registration profile; the backend answers 201.
///
/// Returns the login route for navigation.
pub async fn register(
    api: &ApiClient,
    request: &RegistrationRequest,
) -> Result<Route, ApiError> {
    api.register(request).await?;
    tracing::debug!("user created successfully");
    Ok(Route::Login {})
}

/// Requests an out-of-band password reset email.
///
/// Returns the server's notice for display.
pub async fn request_password_reset(api: &ApiClient, email: &str) -> Result<String, ApiError> {
    let detail = api.request_password_reset(email).await?;
    Ok(detail.detail)
}

/// Confirms a password reset with the link-embedded uid and token.
///
/// Returns the login route for navigation. The server checks that the two
/// submitted passwords match.
pub async fn confirm_password_reset(
    api: &ApiClient,
    request: &PasswordResetConfirmRequest,
) -> Result<Route, ApiError> {
    let detail = api.confirm_password_reset(request).await?;
    tracing::debug!("password reset confirmed: {}", detail.detail);
    Ok(Route::Login {})
}

/// Invalidates the refresh token server-side, then clears the session.
///
/// Returns the login route for navigation. If the server rejects the
/// invalidation the session is left intact so the user can retry.
pub async fn log_out<S: SessionStore>(
    api: &ApiClient,
    session: &mut S,
) -> Result<Route, ApiError> {
    let refresh_token = session.get(TokenSlot::Refresh).unwrap_or_default();
    let access_token = session.get(TokenSlot::Access);

    api.logout(&refresh_token, access_token.as_deref()).await?;
    tracing::info!("logged out, clearing stored session");
    Ok(end_session(session))
}

/// Clears every token slot.
pub fn end_session<S: SessionStore>(session: &mut S) -> Route {
    session.clear();
    Route::Login {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    fn challenge(temp_token: &str) -> OtpChallenge {
        OtpChallenge {
            detail: "OTP sent to your email.".to_string(),
            temp_token: temp_token.to_string(),
        }
    }

    #[test]
    fn test_begin_otp_challenge_stores_temp_token() {
        let mut session = MemorySession::new();

        let next = begin_otp_challenge(&mut session, &challenge("otp_token:abc"));

        assert_eq!(next, Route::OtpChallenge {});
        assert_eq!(
            session.get(TokenSlot::Temp).as_deref(),
            Some("otp_token:abc")
        );
        assert!(session.get(TokenSlot::Access).is_none());
        assert!(session.get(TokenSlot::Refresh).is_none());
    }

    #[test]
    fn test_begin_otp_challenge_replaces_previous_temp_token() {
        let mut session = MemorySession::new();
        begin_otp_challenge(&mut session, &challenge("otp_token:first"));

        begin_otp_challenge(&mut session, &challenge("otp_token:second"));

        assert_eq!(
            session.get(TokenSlot::Temp).as_deref(),
            Some("otp_token:second")
        );
    }

    #[test]
    fn test_establish_session_stores_pair_and_drops_temp() {
        let mut session = MemorySession::new();
        session.set(TokenSlot::Temp, "otp_token:abc");

        let tokens = SessionTokens {
            access_token: "a.b.c".to_string(),
            refresh_token: "d.e.f".to_string(),
        };
        let next = establish_session(&mut session, &tokens);

        assert_eq!(next, Route::Dashboard {});
        assert_eq!(session.get(TokenSlot::Access).as_deref(), Some("a.b.c"));
        assert_eq!(session.get(TokenSlot::Refresh).as_deref(), Some("d.e.f"));
        assert!(session.get(TokenSlot::Temp).is_none());
    }

    #[test]
    fn test_end_session_clears_every_slot() {
        let mut session = MemorySession::new();
        session.set(TokenSlot::Temp, "temp");
        session.set(TokenSlot::Access, "access");
        session.set(TokenSlot::Refresh, "refresh");

        let next = end_session(&mut session);

        assert_eq!(next, Route::Login {});
        assert!(session.is_empty());
    }
}
