//! Password reset request: the server emails an out-of-band reset link.

use dioxus::prelude::*;
use reqwest::StatusCode;

use crate::api::ApiClient;
use crate::error::OFFLINE_NOTICE;
use crate::flows;

const THROTTLED_NOTICE: &str = "Too many requests were made. Please try again after sometime.";

/// Password reset request page.
#[component]
pub fn ResetPassword() -> Element {
    let api = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        if email().trim().is_empty() {
            notice.set(Some("Email is required.".to_string()));
            return;
        }

        let api = api.clone();
        spawn(async move {
            if !api.is_online().await {
                notice.set(Some(OFFLINE_NOTICE.to_string()));
                return;
            }

            match flows::request_password_reset(&api, email().trim()).await {
                Ok(detail) => notice.set(Some(detail)),
                Err(error) if error.status() == Some(StatusCode::TOO_MANY_REQUESTS) => {
                    tracing::warn!("password reset throttled");
                    notice.set(Some(THROTTLED_NOTICE.to_string()));
                }
                Err(error) => {
                    tracing::error!("password reset request failed: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        });
    };

    rsx! {
        form { onsubmit: submit,
            div {
                input {
                    r#type: "email",
                    value: "{email}",
                    placeholder: "Email",
                    oninput: move |event| email.set(event.value()),
                }
            }
            button { r#type: "submit", "Submit" }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
        }
    }
}
