use dioxus::prelude::*;

use crate::client::{
    components::AppShell,
    routes::{Contact, Home, NotFound, Profile, Questions, Resources, SignUp},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]

    #[route("/")]
    Home {},

    #[route("/questions")]
    Questions {},

    #[route("/resources")]
    Resources {},

    #[route("/contact")]
    Contact {},

    #[route("/profile")]
    Profile {},

    #[route("/sign-up")]
    SignUp {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
