use dioxus::prelude::*;

use crate::client::{
    components::NavBar, config::NavConfig, model::Destination, router::Route, store::use_auth,
};

/// Root layout: the navigation bar above the routed page.
///
/// Reads the session and the router here so that [`NavBar`] only deals in props.
#[component]
pub fn AppShell() -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();
    let config = try_use_context::<NavConfig>().unwrap_or_default();

    rsx! {
        NavBar {
            session: auth.snapshot(),
            config,
            on_navigate: move |destination: Destination| {
                navigator.push(Route::from(destination));
            },
            on_sign_out: move |_| auth.sign_out(),
        }

        Outlet::<Route> {}
    }
}
