//! Password reset confirmation reached from the emailed link.

use dioxus::prelude::*;

use crate::api::{ApiClient, PasswordResetConfirmRequest};
use crate::error::OFFLINE_NOTICE;
use crate::flows;

/// Password reset confirmation page.
///
/// `uid` and `token` are embedded in the link path; the new password is
/// submitted twice and the server checks that the two match.
#[component]
pub fn ResetPasswordConfirm(uid: String, token: String) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let request = PasswordResetConfirmRequest {
            uid: uid.clone(),
            token: token.clone(),
            new_password1: password(),
            new_password2: confirm_password(),
        };

        let api = api.clone();
        spawn(async move {
            if !api.is_online().await {
                notice.set(Some(OFFLINE_NOTICE.to_string()));
                return;
            }

            match flows::confirm_password_reset(&api, &request).await {
                Ok(next) => {
                    navigator.push(next);
                }
                Err(error) => {
                    tracing::error!("password reset confirmation failed: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        });
    };

    rsx! {
        form { onsubmit: submit,
            div {
                input {
                    r#type: "password",
                    value: "{password}",
                    placeholder: "New Password",
                    oninput: move |event| password.set(event.value()),
                }
            }
            div {
                input {
                    r#type: "password",
                    value: "{confirm_password}",
                    placeholder: "Confirm Password",
                    oninput: move |event| confirm_password.set(event.value()),
                }
            }
            button { r#type: "submit", "Submit" }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
        }
    }
}
