//! Protected landing page.

use dioxus::prelude::*;

use crate::routes::Route;

/// Dashboard shown after OTP verification succeeds.
#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();

    rsx! {
        h1 { "My Dashboard" }
        button {
            onclick: move |_| {
                navigator.push(Route::Logout {});
            },
            "Logout"
        }
    }
}
