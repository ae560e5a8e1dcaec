//! Route guard for the protected area.
//!
//! Decides render-children vs redirect-to-login from the stored access
//! token: a missing or undecodable token is unauthorized, an unexpired token
//! is authorized immediately, and an expired token gets exactly one refresh
//! attempt before the session is cleared.

use dioxus::prelude::*;

use crate::api::{ApiClient, RefreshedAccess};
use crate::error::ApiError;
use crate::jwt::{self, current_timestamp};
use crate::routes::Route;
use crate::session::{BrowserSession, SessionStore, TokenSlot};

/// Local verdict on the stored access token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessStatus {
    /// No token stored
    Missing,
    /// Token stored but its claims cannot be decoded
    Invalid,
    /// Expiry claim is at or before the current time
    Expired,
    /// Expiry claim is in the future
    Valid,
}

/// Classifies the stored access token against the current time.
///
/// The expiry claim is read without signature verification; an expiry equal
/// to `now` counts as expired.
pub fn access_token_status(token: Option<&str>, now: u64) -> AccessStatus {
    let Some(token) = token else {
        return AccessStatus::Missing;
    };

    match jwt::decode_access_claims(token) {
        Ok(claims) if claims.exp <= now => AccessStatus::Expired,
        Ok(_) => AccessStatus::Valid,
        Err(error) => {
            tracing::warn!("stored access token is not decodable: {error}");
            AccessStatus::Invalid
        }
    }
}

/// Applies the outcome of the single refresh attempt to the session.
///
/// Success replaces the access token and authorizes; any failure clears the
/// credential pair and leaves the session unauthorized.
pub fn apply_refresh_outcome<S: SessionStore>(
    session: &mut S,
    outcome: Result<RefreshedAccess, ApiError>,
) -> bool {
    match outcome {
        Ok(renewed) => {
            session.set(TokenSlot::Access, &renewed.access);
            tracing::debug!("access token renewed");
            true
        }
        Err(error) => {
            tracing::warn!("token refresh failed: {error}");
            session.remove(TokenSlot::Access);
            session.remove(TokenSlot::Refresh);
            false
        }
    }
}

/// Runs the guard check against the stored session.
///
/// At most one network call is made (the refresh exchange), and only when
/// the stored token has expired.
pub async fn authorize<S: SessionStore>(api: &ApiClient, session: &mut S, now: u64) -> bool {
    match access_token_status(session.get(TokenSlot::Access).as_deref(), now) {
        AccessStatus::Valid => true,
        AccessStatus::Missing => {
            tracing::debug!("no access token stored");
            false
        }
        AccessStatus::Invalid => false,
        AccessStatus::Expired => {
            let Some(refresh_token) = session.get(TokenSlot::Refresh) else {
                tracing::warn!("access token expired and no refresh token stored");
                session.remove(TokenSlot::Access);
                return false;
            };
            apply_refresh_outcome(session, api.refresh(&refresh_token).await)
        }
    }
}

/// Layout component wrapping the protected routes.
///
/// Runs [`authorize`] once per mount (latched against duplicate
/// invocation), renders a placeholder while the check is pending, and
/// replaces the location with the login route when it fails.
#[component]
pub fn RequireAuth() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut authorized = use_signal(|| None::<bool>);
    let mut checked = use_signal(|| false);

    use_effect(move || {
        // Latch: the check runs once per mount.
        if checked() {
            return;
        }
        checked.set(true);

        let api = api.clone();
        spawn(async move {
            let mut session = BrowserSession;
            let verdict = authorize(&api, &mut session, current_timestamp()).await;
            if !verdict {
                navigator.replace(Route::Login {});
            }
            authorized.set(Some(verdict));
        });
    });

    match authorized() {
        Some(true) => rsx! {
            Outlet::<Route> {}
        },
        Some(false) => rsx! {
            p { "Redirecting to login..." }
        },
        None => rsx! {
            p { "Loading..." }
        },
    }
}
