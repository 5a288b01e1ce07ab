pub mod menu;
pub mod navigation;
pub mod session;

pub use menu::{MenuEvent, MenuState};
pub use navigation::{
    dispatch_navigation_label, dispatch_setting_label, handle_navigation_action,
    handle_setting_action, Destination, NavActions, NavPage, SettingAction, SettingItem,
};
pub use session::SessionState;
