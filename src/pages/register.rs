//! Registration form for new accounts.

use dioxus::prelude::*;

use crate::api::{ApiClient, RegistrationRequest};
use crate::error::OFFLINE_NOTICE;
use crate::flows;

/// Registration page.
///
/// Client-side validation is basic field presence only; everything else is
/// validated server-side and surfaced from the error payload.
#[component]
pub fn Register() -> Element {
    let api = use_context::<ApiClient>();
    let navigator = use_navigator();
    let mut fullname = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut user_email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut grade = use_signal(String::new);
    let mut division = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let request = RegistrationRequest {
            fullname: fullname().trim().to_string(),
            username: username().trim().to_string(),
            user_email: user_email().trim().to_string(),
            password: password(),
            role: role().trim().to_string(),
            grade: grade().trim().to_string(),
            division: division().trim().to_string(),
        };

        let missing = [
            &request.fullname,
            &request.username,
            &request.user_email,
            &request.password,
            &request.role,
            &request.grade,
            &request.division,
        ]
        .iter()
        .any(|field| field.is_empty());

        if missing {
            notice.set(Some("All fields are required.".to_string()));
            return;
        }

        let api = api.clone();
        spawn(async move {
            if !api.is_online().await {
                notice.set(Some(OFFLINE_NOTICE.to_string()));
                return;
            }

            match flows::register(&api, &request).await {
                Ok(next) => {
                    navigator.push(next);
                }
                Err(error) => {
                    tracing::error!("registration failed: {error}");
                    notice.set(Some(error.to_string()));
                }
            }
        });
    };

    rsx! {
        form { onsubmit: submit,
            h1 { "Registration Form" }
            div {
                input {
                    r#type: "text",
                    value: "{fullname}",
                    placeholder: "Fullname",
                    oninput: move |event| fullname.set(event.value()),
                }
            }
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
                    r#type: "email",
                    value: "{user_email}",
                    placeholder: "Email address",
                    oninput: move |event| user_email.set(event.value()),
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
                input {
                    r#type: "text",
                    value: "{role}",
                    placeholder: "Role",
                    oninput: move |event| role.set(event.value()),
                }
            }
            div {
                input {
                    r#type: "text",
                    value: "{grade}",
                    placeholder: "Grade",
                    oninput: move |event| grade.set(event.value()),
                }
            }
            div {
                input {
                    r#type: "text",
                    value: "{division}",
                    placeholder: "Division",
                    oninput: move |event| division.set(event.value()),
                }
            }
            button { r#type: "submit", "Register" }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
        }
    }
}
