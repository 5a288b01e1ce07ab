use dioxus::prelude::*;

use crate::client::model::Destination;

#[component]
pub fn BrandLink(brand: String, on_navigate: EventHandler<Destination>) -> Element {
    rsx!(
        a {
            href: Destination::Home.path(),
            class: "no-underline",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_navigate.call(Destination::Home);
            },
            h1 { class: "text-2xl text-white",
                "{brand}"
            }
        }
    )
}
