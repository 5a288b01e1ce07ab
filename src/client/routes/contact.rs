use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Contact() -> Element {
    rsx!(
        Title { "Contact Us | QCA" }
        Page { class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl font-semibold",
                "Contact Us"
            }
            p { "Reach the team through the community forum." }
        }
    )
}
