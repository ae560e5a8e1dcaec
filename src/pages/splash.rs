//! Landing page shown at the root path.

use dioxus::prelude::*;

use crate::routes::Route;

/// Brand screen that hands off to the login page.
#[component]
pub fn Splash() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::Login {});
    });

    rsx! {
        div { class: "splash-screen",
            h1 { class: "logo-text", "CiviBase" }
        }
    }
}
