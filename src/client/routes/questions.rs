use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Questions() -> Element {
    rsx!(
        Title { "Questions | QCA" }
        Page { class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl font-semibold",
                "Questions"
            }
            p { "No questions have been asked yet." }
        }
    )
}
