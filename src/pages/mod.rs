//! Form components, one per route.
//!
//! Each page drives at most one outstanding request through the flows
//! module and surfaces failures as an inline notice. Styling is left to the
//! host document.

mod dashboard;
mod login;
mod logout;
mod otp;
mod register;
mod reset_confirm;
mod reset_password;
mod splash;

pub use dashboard::Dashboard;
pub use login::Login;
pub use logout::Logout;
pub use otp::OtpChallenge;
pub use register::Register;
pub use reset_confirm::ResetPasswordConfirm;
pub use reset_password::ResetPassword;
pub use splash::Splash;
