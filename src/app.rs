//! Application root.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::routes::Route;

/// Root component: provides the shared API client and mounts the router.
#[component]
pub fn App() -> Element {
    use_context_provider(|| ApiClient::new(ApiConfig::from_env_or_dev()));

    rsx! {
        Router::<Route> {}
    }
}
