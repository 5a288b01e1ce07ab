use dioxus::prelude::*;

/// Full-width indeterminate progress bar
#[component]
pub fn LoadingIndicator() -> Element {
    rsx!(
        div { class: "w-full",
            progress {
                class: "progress progress-secondary block w-full rounded-none",
                aria_label: "Loading",
            }
        }
    )
}
