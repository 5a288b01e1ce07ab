use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::use_auth};

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let session = auth.snapshot();

    rsx!(
        Title { "Profile | QCA" }
        Page { class: "flex flex-col items-center",
            div {
                class: "card shadow-sm w-full max-w-96",
                div {
                    class: "card-body items-center",
                    h2 {
                        class: "card-title",
                        "Profile"
                    }
                    if let Some(user) = session.user.clone() {
                        if let Some(avatar) = user.avatar.clone() {
                            div { class: "avatar",
                                div {
                                    class: "w-24 rounded-full",
                                    img { src: "{avatar}", alt: user.avatar_alt() }
                                }
                            }
                        }
                        p {
                            class: "text-lg font-semibold mt-2",
                            "{user.first_name}"
                        }
                    } else if session.loading {
                        div {
                            class: "skeleton h-24 w-24 rounded-full"
                        }
                    } else {
                        p { "You are not signed in." }
                        Link {
                            to: Route::SignUp {},
                            class: "btn btn-primary",
                            "Sign up"
                        }
                    }
                }
            }
        }
    )
}
