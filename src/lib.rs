//! # civibase-web
//!
//! Browser client for the CiviBase personnel records service: a Dioxus
//! single-page application covering registration, password + email-OTP
//! login, JWT session management, password reset, and route protection
//! against the CiviBase REST backend.
//!
//! ## Overview
//!
//! The session lifecycle is the spine of the crate:
//!
//! - A successful password check stores a **temporary token** and opens the
//!   OTP challenge.
//! - A verified OTP code exchanges the temporary token for an
//!   **access/refresh** credential pair and unlocks the protected area.
//! - The route guard admits mounts with an unexpired access token, spends at
//!   most one refresh attempt on an expired one, and otherwise clears the
//!   session and redirects to login.
//! - Logout invalidates the refresh token server-side and empties every
//!   token slot.
//!
//! ## Architecture
//!
//! - [`config`] - API base URL and endpoint map, loaded from compile-time
//!   environment variables
//! - [`session`] - the three token slots behind the injectable
//!   [`SessionStore`] interface ([`BrowserSession`] over localStorage in the
//!   browser, [`MemorySession`] in tests)
//! - [`jwt`] - expiry-claim decoding without signature verification
//! - [`api`] - `reqwest` wrapper with bearer attachment, error payload
//!   flattening, and the connectivity probe
//! - [`flows`] - one async operation per user action, with the session
//!   mutations factored into pure apply steps
//! - [`guard`] - the route-guard decision and the `RequireAuth` layout
//! - [`routes`] / [`pages`] - the URL surface and its form components
//!
//! ## Platform notes
//!
//! Browser storage access is compiled only for `wasm32`; native builds get
//! inert stubs so the decision logic stays testable with `cargo test` on the
//! host.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod flows;
pub mod guard;
pub mod jwt;
pub mod pages;
pub mod routes;
pub mod session;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::Route;
pub use session::{BrowserSession, MemorySession, SessionStore, TokenSlot};
