use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Resources() -> Element {
    rsx!(
        Title { "Resources | QCA" }
        Page { class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl font-semibold",
                "Resources"
            }
            p { "Guides and reading material will be listed here." }
        }
    )
}
