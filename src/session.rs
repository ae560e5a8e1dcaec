//! Session token persistence with an injectable store interface.
//!
//! The session is encoded entirely by the presence of three named token
//! slots:
//!
//! - `temp_token` - intermediate credential between the password check and
//!   OTP verification
//! - `access_token` - short-lived bearer credential carrying an expiry claim
//! - `refresh_token` - long-lived credential exchanged for a new access token
//!
//! The production store is browser localStorage, but every consumer talks to
//! the [`SessionStore`] trait so tests can substitute [`MemorySession`].
//!
//! ## Lifecycle
//!
//! - On login: `temp_token` is written (replaced again on OTP resend)
//! - On OTP success: `access_token` and `refresh_token` are written and
//!   `temp_token` is removed
//! - On refresh: `access_token` is replaced
//! - On logout or failed refresh: the credential pair is removed

use tracing;

/// localStorage key for the temporary login token.
pub const TEMP_TOKEN_KEY: &str = "temp_token";

/// localStorage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// localStorage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The three named token slots a session is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    /// Intermediate credential consumed by OTP verification.
    Temp,
    /// Bearer credential for API calls.
    Access,
    /// Credential exchanged for a fresh access token.
    Refresh,
}

impl TokenSlot {
    /// All slots, in lifecycle order.
    pub const ALL: [TokenSlot; 3] = [TokenSlot::Temp, TokenSlot::Access, TokenSlot::Refresh];

    /// Returns the fixed storage key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            TokenSlot::Temp => TEMP_TOKEN_KEY,
            TokenSlot::Access => ACCESS_TOKEN_KEY,
            TokenSlot::Refresh => REFRESH_TOKEN_KEY,
        }
    }
}

/// Store interface for the three session token slots.
///
/// Exactly one value may be held per slot; writing replaces the previous
/// value. Implementations must degrade gracefully (return `None`, drop the
/// write) when the backing storage is unavailable.
pub trait SessionStore {
    /// Returns the token held in `slot`, if any.
    fn get(&self, slot: TokenSlot) -> Option<String>;

    /// Stores `value` in `slot`, replacing any previous value.
    fn set(&mut self, slot: TokenSlot, value: &str);

    /// Removes the token held in `slot`.
    fn remove(&mut self, slot: TokenSlot);

    /// Removes every token slot.
    fn clear(&mut self) {
        for slot in TokenSlot::ALL {
            self.remove(slot);
        }
    }
}

/// Session store backed by browser localStorage.
///
/// Only functional on `wasm32`; native builds get inert stubs so shared code
/// and tests compile without a browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSession;

#[cfg(target_arch = "wasm32")]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSession {
    fn get(&self, slot: TokenSlot) -> Option<String> {
        Self::storage()?.get_item(slot.key()).ok()?
    }

    fn set(&mut self, slot: TokenSlot, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(slot.key(), value);
        } else {
            tracing::warn!("localStorage unavailable, dropping write to {}", slot.key());
        }
    }

    fn remove(&mut self, slot: TokenSlot) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(slot.key());
        }
    }
}

/// Non-WASM stubs for BrowserSession.
#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for BrowserSession {
    fn get(&self, _slot: TokenSlot) -> Option<String> {
        tracing::trace!("browser session read skipped (non-WASM)");
        None
    }

    fn set(&mut self, _slot: TokenSlot, _value: &str) {
        tracing::trace!("browser session write skipped (non-WASM)");
    }

    fn remove(&mut self, _slot: TokenSlot) {
        tracing::trace!("browser session removal skipped (non-WASM)");
    }
}

/// In-memory session store for tests and non-browser hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySession {
    tokens: std::collections::HashMap<TokenSlot, String>,
}

impl MemorySession {
    /// Creates an empty in-memory session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no slot holds a token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, slot: TokenSlot) -> Option<String> {
        self.tokens.get(&slot).cloned()
    }

    fn set(&mut self, slot: TokenSlot, value: &str) {
        self.tokens.insert(slot, value.to_string());
    }

    fn remove(&mut self, slot: TokenSlot) {
        self.tokens.remove(&slot);
    }
}
