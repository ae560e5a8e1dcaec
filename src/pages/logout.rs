//! Logout confirmation.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::flows;
use crate::routes::Route;
use crate::session::BrowserSession;

/// Logout confirmation page.
///
/// Yes invalidates the refresh token server-side, clears all three stored
/// token slots, and returns to the login page; No goes back to the
/// dashboard. A rejected invalidation leaves the session intact so the
/// user can retry.
#[component]
pub fn Logout() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut notice = use_signal(|| None::<String>);

    let confirm = move |_| {
        let api = api.clone();
        spawn(async move {
            let mut session = BrowserSession;
            match flows::log_out(&api, &mut session).await {
                Ok(next) => {
                    navigator.push(next);
                }
                Err(error) => {
                    tracing::error!("logout failed: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        });
    };

    rsx! {
        p { "Are you sure you want to logout?" }
        button { onclick: confirm, "Yes" }
        button {
            onclick: move |_| {
                navigator.push(Route::Dashboard {});
            },
            "No"
        }
        if let Some(message) = notice() {
            p { class: "notice", "{message}" }
        }
    }
}
