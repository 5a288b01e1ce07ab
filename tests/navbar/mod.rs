mod brand;
mod desktop;
mod loading;
mod trailing_control;

use dioxus::prelude::*;
use qca::client::{components::NavBar, config::NavConfig, model::SessionState};
use qca_test_utils::prelude::*;

/// Mounts the navigation bar with no-op callbacks so it can be rendered without a router
#[component]
fn Harness(session: SessionState, config: Option<NavConfig>) -> Element {
    rsx! {
        NavBar {
            session,
            config: config.unwrap_or_default(),
            on_navigate: move |_| {},
            on_sign_out: move |_| {},
        }
    }
}

fn render(session: SessionState) -> RenderedHtml {
    render_component(
        Harness,
        HarnessProps {
            session,
            config: None,
        },
    )
}

fn render_with_config(session: SessionState, config: NavConfig) -> RenderedHtml {
    render_component(
        Harness,
        HarnessProps {
            session,
            config: Some(config),
        },
    )
}
