use dioxus::prelude::*;

use crate::client::{router::Route, store::AuthContext};

#[component]
pub fn App() -> Element {
    AuthContext::provide();

    rsx! {
        Router::<Route> {}
    }
}
