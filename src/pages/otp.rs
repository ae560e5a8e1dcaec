//! OTP challenge: verify the emailed code or request a fresh one.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::error::OFFLINE_NOTICE;
use crate::flows;
use crate::session::BrowserSession;

/// OTP verification page.
///
/// Verify exchanges the stored temporary token plus the entered code for
/// the session credential pair; Resend replaces the temporary token to
/// restart the code's validity window.
#[component]
pub fn OtpChallenge() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut otp = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let verify = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                if !api.is_online().await {
                    notice.set(Some(OFFLINE_NOTICE.to_string()));
                    return;
                }

                let mut session = BrowserSession;
                match flows::verify_otp(&api, &mut session, otp().trim()).await {
                    Ok(next) => {
                        navigator.push(next);
                    }
                    Err(error) => {
                        tracing::error!("OTP verification failed: {error}");
                        notice.set(Some(error.to_string()));
                    }
                }
            });
        }
    };

    let resend = move |_| {
        let api = api.clone();
        spawn(async move {
            if !api.is_online().await {
                notice.set(Some(OFFLINE_NOTICE.to_string()));
                return;
            }

            let mut session = BrowserSession;
            match flows::resend_otp(&api, &mut session).await {
                Ok(detail) => notice.set(Some(detail)),
                Err(error) => {
                    tracing::error!("OTP resend failed: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        });
    };

    rsx! {
        h1 { "OTP Form" }
        input {
            r#type: "text",
            value: "{otp}",
            placeholder: "OTP",
            oninput: move |event| otp.set(event.value()),
        }
        button { onclick: verify, "Verify" }
        button { onclick: resend, "Resend" }
        if let Some(message) = notice() {
            p { class: "notice", "{message}" }
        }
    }
}
