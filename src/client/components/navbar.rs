use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaRightToBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{BrandLink, LoadingIndicator},
        config::NavConfig,
        model::{
            handle_navigation_action, handle_setting_action, Destination, MenuEvent, MenuState,
            NavActions, NavPage, SessionState, SettingItem,
        },
    },
    model::user::UserDto,
};

/// Routes navigation bar actions into the callbacks it was given
#[derive(Clone, Copy)]
struct HandlerActions {
    on_navigate: EventHandler<Destination>,
    on_sign_out: EventHandler,
}

impl NavActions for HandlerActions {
    fn navigate(&mut self, destination: Destination) {
        self.on_navigate.call(destination);
    }

    fn sign_out(&mut self) {
        self.on_sign_out.call(());
    }
}

fn send(mut menu: Signal<MenuState>, event: MenuEvent) {
    let next = menu.peek().on(event);
    menu.set(next);
}

/// The menu event a key press inside an open menu maps to
fn menu_key_event(key: &Key) -> Option<MenuEvent> {
    (*key == Key::Escape).then_some(MenuEvent::EscapePressed)
}

fn on_menu_key(menu: Signal<MenuState>, evt: KeyboardEvent) {
    if menu.peek().is_open() {
        if let Some(event) = menu_key_event(&evt.key()) {
            send(menu, event);
        }
    }
}

fn select_page<A: NavActions>(page: NavPage, actions: &mut A, menu: Signal<MenuState>) {
    handle_navigation_action(page, actions);
    send(menu, MenuEvent::ItemSelected);
}

fn select_setting<A: NavActions>(setting: SettingItem, actions: &mut A, menu: Signal<MenuState>) {
    handle_setting_action(setting, actions);
    send(menu, MenuEvent::ItemSelected);
}

async fn focus_menu(evt: MountedEvent) {
    if let Err(e) = evt.set_focus(true).await {
        tracing::debug!("Could not focus menu: {:?}", e);
    }
}

/// Top app bar with page navigation and the session-aware user control.
///
/// The session and both side effects are passed in explicitly, see
/// [`AppShell`](crate::client::components::AppShell) for the wiring used by the app.
#[component]
pub fn NavBar(
    session: SessionState,
    on_navigate: EventHandler<Destination>,
    on_sign_out: EventHandler,
    #[props(default)] config: NavConfig,
) -> Element {
    let nav_menu = use_signal(MenuState::default);
    let mut actions = HandlerActions {
        on_navigate,
        on_sign_out,
    };

    rsx! {
        header {
            class: "sticky top-0 z-30 w-full bg-primary text-primary-content shadow",
            nav {
                class: "navbar justify-between px-4",
                // Mobile menu. Escape is handled here so it reaches the menu from the trigger too.
                div {
                    class: "relative flex md:hidden",
                    onkeydown: move |evt: KeyboardEvent| on_menu_key(nav_menu, evt),
                    button {
                        class: "btn btn-ghost btn-square",
                        aria_label: "Open navigation menu",
                        aria_controls: "menu-appbar",
                        aria_haspopup: "true",
                        aria_expanded: nav_menu().is_open().to_string(),
                        onclick: move |_| send(nav_menu, MenuEvent::TriggerClicked),
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaBars
                        }
                    }
                    if nav_menu().is_open() {
                        div {
                            class: "fixed inset-0 z-40",
                            onclick: move |_| send(nav_menu, MenuEvent::OutsideClicked),
                        }
                        PageMenu {
                            pages: config.pages.clone(),
                            on_select: move |page| select_page(page, &mut actions, nav_menu),
                        }
                    }
                }
                BrandLink { brand: config.brand.clone(), on_navigate }
                // Desktop navigation
                div {
                    class: "hidden md:flex",
                    for page in config.pages.iter().copied() {
                        button {
                            key: "{page}",
                            class: "btn btn-ghost font-medium normal-case",
                            onclick: move |_| handle_navigation_action(page, &mut actions),
                            {page.label()}
                        }
                    }
                }
                div {
                    class: "flex-none",
                    if let Some(user) = session.user.clone() {
                        UserMenu { user, config: config.clone(), on_navigate, on_sign_out }
                    } else {
                        a {
                            href: Destination::SignUp.path(),
                            class: "btn btn-ghost btn-circle text-white",
                            aria_label: "Sign up",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                actions.navigate(Destination::SignUp);
                            },
                            Icon {
                                width: 22,
                                height: 22,
                                icon: FaRightToBracket
                            }
                        }
                    }
                }
            }
            if session.loading {
                LoadingIndicator {}
            }
        }
    }
}

/// Items of the open mobile menu
#[component]
pub fn PageMenu(pages: Vec<NavPage>, on_select: EventHandler<NavPage>) -> Element {
    rsx! {
        ul {
            id: "menu-appbar",
            class: "menu absolute left-0 top-full z-50 mt-2 w-52 rounded-box bg-base-100 text-base-content shadow",
            role: "menu",
            tabindex: "0",
            onmounted: move |evt| focus_menu(evt),
            for page in pages {
                li {
                    key: "{page}",
                    role: "menuitem",
                    button {
                        class: "justify-center",
                        onclick: move |_| on_select.call(page),
                        {page.label()}
                    }
                }
            }
        }
    }
}

/// Items of the open user settings menu
#[component]
pub fn SettingsMenu(settings: Vec<SettingItem>, on_select: EventHandler<SettingItem>) -> Element {
    rsx! {
        ul {
            id: "menu-user",
            class: "menu absolute right-0 top-full z-50 mt-3 w-44 rounded-box bg-base-100 text-base-content shadow",
            role: "menu",
            tabindex: "0",
            onmounted: move |evt| focus_menu(evt),
            for setting in settings {
                li {
                    key: "{setting}",
                    role: "menuitem",
                    button {
                        class: "justify-center",
                        onclick: move |_| on_select.call(setting),
                        {setting.label()}
                    }
                }
            }
        }
    }
}

/// Avatar button and the settings menu it opens
#[component]
fn UserMenu(
    user: UserDto,
    config: NavConfig,
    on_navigate: EventHandler<Destination>,
    on_sign_out: EventHandler,
) -> Element {
    let user_menu = use_signal(MenuState::default);
    let mut actions = HandlerActions {
        on_navigate,
        on_sign_out,
    };
    let alt = user.avatar_alt();

    rsx! {
        div {
            class: "relative",
            onkeydown: move |evt: KeyboardEvent| on_menu_key(user_menu, evt),
            div {
                class: "tooltip tooltip-bottom",
                "data-tip": "User",
                button {
                    class: "btn btn-ghost btn-circle p-0",
                    aria_controls: "menu-user",
                    aria_haspopup: "true",
                    aria_expanded: user_menu().is_open().to_string(),
                    onclick: move |_| send(user_menu, MenuEvent::TriggerClicked),
                    if let Some(avatar) = user.avatar.as_deref() {
                        div {
                            class: "avatar",
                            div {
                                class: "w-10 rounded-full",
                                img { src: "{avatar}", alt: "{alt}" }
                            }
                        }
                    } else {
                        div {
                            class: "avatar avatar-placeholder",
                            div {
                                class: "w-10 rounded-full bg-[crimson] text-white",
                                span { aria_label: "{alt}", {user.initial()} }
                            }
                        }
                    }
                }
            }
            if user_menu().is_open() {
                div {
                    class: "fixed inset-0 z-40",
                    onclick: move |_| send(user_menu, MenuEvent::OutsideClicked),
                }
                SettingsMenu {
                    settings: config.settings.clone(),
                    on_select: move |setting| select_setting(setting, &mut actions, user_menu),
                }
            }
        }
    }
}
