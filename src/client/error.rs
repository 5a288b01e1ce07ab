//! Error types for the QCA web client.
//!
//! Labels shown in the navigation bar map onto closed enumerations, so the only
//! failures left are labels that have no mapping. Those surface either at startup
//! while building the [`NavConfig`](crate::client::config::NavConfig) or when a
//! label string is dispatched directly.

use thiserror::Error;

/// Invalid navigation bar configuration, detected before the app is launched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A page label has no route mapped to it.
    #[error("No route is mapped to navigation page label {0:?}")]
    UnknownPageLabel(String),
    /// A settings label has no action mapped to it.
    #[error("No action is mapped to settings label {0:?}")]
    UnknownSettingLabel(String),
    /// The same label was configured more than once in a single menu.
    #[error("Label {0:?} appears more than once in the same menu")]
    DuplicateLabel(String),
    /// The navigation bar needs at least one page.
    #[error("At least one navigation page must be configured")]
    EmptyPages,
}

/// A label string that does not correspond to any menu entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown menu label: {0:?}")]
pub struct UnknownLabel(pub String);
