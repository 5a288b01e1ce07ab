use std::{fmt, str::FromStr};

use dioxus_logger::tracing;

use crate::client::{error::UnknownLabel, router::Route};

/// A place the navigation bar can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Questions,
    Resources,
    Contact,
    Profile,
    SignUp,
}

impl Destination {
    /// The path handed to the router.
    ///
    /// Page paths other than home are relative and resolve against the root
    /// layout the navigation bar is mounted in.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Questions => "questions/",
            Self::Resources => "resources/",
            Self::Contact => "contact/",
            Self::Profile => "/profile",
            Self::SignUp => "/sign-up",
        }
    }
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Questions => Route::Questions {},
            Destination::Resources => Route::Resources {},
            Destination::Contact => Route::Contact {},
            Destination::Profile => Route::Profile {},
            Destination::SignUp => Route::SignUp {},
        }
    }
}

/// Pages listed in the mobile menu and as desktop buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavPage {
    Home,
    Questions,
    Resources,
    ContactUs,
}

impl NavPage {
    pub const ALL: [NavPage; 4] = [
        NavPage::Home,
        NavPage::Questions,
        NavPage::Resources,
        NavPage::ContactUs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Questions => "Questions",
            Self::Resources => "Resources",
            Self::ContactUs => "Contact Us",
        }
    }

    pub fn destination(self) -> Destination {
        match self {
            Self::Home => Destination::Home,
            Self::Questions => Destination::Questions,
            Self::Resources => Destination::Resources,
            Self::ContactUs => Destination::Contact,
        }
    }
}

impl fmt::Display for NavPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NavPage {
    type Err = UnknownLabel;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.label() == label)
            .ok_or_else(|| UnknownLabel(label.to_string()))
    }
}

/// Entries of the user settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingItem {
    Profile,
    Account,
    Dashboard,
    Logout,
}

/// What selecting a settings entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingAction {
    Navigate(Destination),
    /// Sign out, then navigate without waiting for the sign out to finish
    SignOut { then: Destination },
}

impl SettingItem {
    pub const ALL: [SettingItem; 4] = [
        SettingItem::Profile,
        SettingItem::Account,
        SettingItem::Dashboard,
        SettingItem::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Account => "Account",
            Self::Dashboard => "Dashboard",
            Self::Logout => "Logout",
        }
    }

    /// `Account` and `Dashboard` are listed but have nothing bound to them yet.
    pub fn action(self) -> Option<SettingAction> {
        match self {
            Self::Profile => Some(SettingAction::Navigate(Destination::Profile)),
            Self::Logout => Some(SettingAction::SignOut {
                then: Destination::Home,
            }),
            Self::Account | Self::Dashboard => None,
        }
    }
}

impl fmt::Display for SettingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SettingItem {
    type Err = UnknownLabel;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|setting| setting.label() == label)
            .ok_or_else(|| UnknownLabel(label.to_string()))
    }
}

/// Side effects the navigation bar can trigger.
///
/// Implemented over the component's event handlers in the app and over a
/// recording double in tests.
pub trait NavActions {
    fn navigate(&mut self, destination: Destination);
    fn sign_out(&mut self);
}

/// Navigate to the destination mapped to `page`
pub fn handle_navigation_action<A: NavActions>(page: NavPage, actions: &mut A) {
    let destination = page.destination();
    tracing::debug!("Navigating to {} ({})", page, destination.path());
    actions.navigate(destination);
}

/// Run the action bound to `setting`, if any
pub fn handle_setting_action<A: NavActions>(setting: SettingItem, actions: &mut A) {
    match setting.action() {
        Some(SettingAction::Navigate(destination)) => {
            tracing::debug!("Settings {} navigating to {}", setting, destination.path());
            actions.navigate(destination);
        }
        Some(SettingAction::SignOut { then }) => {
            actions.sign_out();
            actions.navigate(then);
        }
        None => tracing::debug!("No action bound to settings entry {}", setting),
    }
}

/// Dispatch a page by its label.
///
/// # Returns
/// - `Ok(())` - The label matched a page and navigation was requested
/// - `Err(UnknownLabel)` - No page has this label, nothing was navigated
pub fn dispatch_navigation_label<A: NavActions>(
    label: &str,
    actions: &mut A,
) -> Result<(), UnknownLabel> {
    let page = label.parse::<NavPage>().inspect_err(|e| tracing::warn!("{}", e))?;
    handle_navigation_action(page, actions);

    Ok(())
}

/// Dispatch a settings entry by its label.
///
/// # Returns
/// - `Ok(())` - The label matched a settings entry (which may be inert)
/// - `Err(UnknownLabel)` - No settings entry has this label, nothing was run
pub fn dispatch_setting_label<A: NavActions>(
    label: &str,
    actions: &mut A,
) -> Result<(), UnknownLabel> {
    let setting = label
        .parse::<SettingItem>()
        .inspect_err(|e| tracing::warn!("{}", e))?;
    handle_setting_action(setting, actions);

    Ok(())
}
