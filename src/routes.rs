//! Route table for the application.
//!
//! The dashboard and logout confirmation are nested under the
//! [`RequireAuth`] layout; everything else is public.

use dioxus::prelude::*;

use crate::guard::RequireAuth;
use crate::pages::{
    Dashboard, Login, Logout, OtpChallenge, Register, ResetPassword, ResetPasswordConfirm, Splash,
};

/// URL surface of the application.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Splash {},

    #[route("/auth/register")]
    Register {},

    #[route("/auth/login")]
    Login {},

    #[route("/auth/otp")]
    OtpChallenge {},

    #[route("/reset-password")]
    ResetPassword {},

    #[route("/password/reset/confirm/:uid/:token")]
    ResetPasswordConfirm { uid: String, token: String },

    #[layout(RequireAuth)]
    #[route("/dashboard")]
    Dashboard {},

    #[route("/auth/logout")]
    Logout {},
}
