use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, router::Route, store::use_auth},
    model::user::UserDto,
};

#[component]
pub fn SignUp() -> Element {
    let mut auth = use_auth();
    let navigator = use_navigator();
    let mut first_name = use_signal(String::new);

    rsx!(
        Title { "Sign up | QCA" }
        Page { class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl font-semibold",
                "Sign up"
            }
            p { "Create an account to ask questions and keep track of answers." }
            form {
                class: "flex gap-2",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let name = first_name.read().trim().to_string();
                    if name.is_empty() {
                        return;
                    }
                    auth.sign_in(UserDto {
                        id: 1,
                        first_name: name,
                        avatar: None,
                    });
                    navigator.push(Route::Home {});
                },
                input {
                    class: "input input-bordered",
                    placeholder: "First name",
                    value: "{first_name}",
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Continue" }
            }
        }
    )
}
