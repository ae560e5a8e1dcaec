//! Login form: username/password check that opens the OTP challenge.

use dioxus::prelude::*;

use crate::api::{ApiClient, LoginRequest};
use crate::error::OFFLINE_NOTICE;
use crate::flows;
use crate::routes::Route;
use crate::session::{BrowserSession, SessionStore};

/// Login page.
///
/// Visiting it discards whatever session came before, so a half-finished
/// OTP challenge or a stale credential pair never leaks into a new login.
#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    use_effect(move || {
        let mut session = BrowserSession;
        session.clear();
    });

    let submit = move |event: FormEvent| {
        event.prevent_default();

        if username().trim().is_empty() || password().is_empty() {
            notice.set(Some("Username and password are required.".to_string()));
            return;
        }

        let api = api.clone();
        spawn(async move {
            if !api.is_online().await {
                tracing::warn!("{OFFLINE_NOTICE}");
                notice.set(Some(OFFLINE_NOTICE.to_string()));
                return;
            }

            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
                role: Some(role()).filter(|selected| !selected.is_empty()),
            };

            let mut session = BrowserSession;
            match flows::log_in(&api, &mut session, &request).await {
                Ok(next) => {
                    navigator.push(next);
                }
                Err(error) => {
                    tracing::error!("login failed: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        });
    };

    rsx! {
        form { onsubmit: submit,
            h1 { "Login Form" }
            div {
                input {
                    r#type: "text",
                    value: "{username}",
                    placeholder: "Username",
                    oninput: move |event| username.set(event.value()),
                }
            }
            div {
                input {
                    r#type: "password",
                    value: "{password}",
                    placeholder: "Password",
                    oninput: move |event| password.set(event.value()),
                }
            }
            div {
                select {
                    value: "{role}",
                    oninput: move |event| role.set(event.value()),
                    option { value: "", "Role (optional)" }
                    option { value: "ADMINISTRATOR", "Administrator" }
                    option { value: "STANDARD USER", "Standard User" }
                    option { value: "VIEWER", "Viewer" }
                }
            }
            button { r#type: "submit", "Login" }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
        }
        Link { to: Route::ResetPassword {}, "Forgot Password?" }
    }
}
