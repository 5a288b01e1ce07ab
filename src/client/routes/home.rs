use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::use_auth;

#[component]
pub fn GetStarted() -> Element {
    let auth = use_auth();

    rsx!(
        ul { class: "flex gap-2",
            if auth.snapshot().is_authenticated() {
                li {
                    Link {
                        to: Route::Questions {},
                        class: "btn btn-primary w-36",
                        "Browse questions"
                    }
                }
            } else {
                li {
                    Link {
                        to: Route::SignUp {},
                        class: "btn btn-primary w-36",
                        "Sign up"
                    }
                }
            }
            li {
                Link {
                    to: Route::Resources {},
                    class: "btn btn-outline w-36",
                    "Resources"
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "QCA" }
        Meta {
            name: "description",
            content: "Ask questions, find answers and resources."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl",
                    "QCA"
                }
                p { class: "max-w-256 text-center",
                    "Ask questions, share answers, and find resources collected by the community."
                }
                GetStarted { }
            }
        }
    )
}
