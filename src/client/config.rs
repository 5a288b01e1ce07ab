use std::collections::HashSet;

use crate::client::{
    error::ConfigError,
    model::{NavPage, SettingItem},
};

pub const DEFAULT_BRAND: &str = "QCA";
pub const PAGE_LABELS: [&str; 4] = ["Home", "Questions", "Resources", "Contact Us"];
pub const SETTING_LABELS: [&str; 4] = ["Profile", "Account", "Dashboard", "Logout"];

/// Contents of the navigation bar
#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub brand: String,
    pub pages: Vec<NavPage>,
    pub settings: Vec<SettingItem>,
}

impl NavConfig {
    /// Build a config from menu labels, rejecting any label without a mapping.
    ///
    /// # Returns
    /// - `Ok(NavConfig)` - Every label maps to a page or settings entry
    /// - `Err(ConfigError)` - An unknown, duplicated, or missing label
    pub fn from_labels(pages: &[&str], settings: &[&str]) -> Result<Self, ConfigError> {
        if pages.is_empty() {
            return Err(ConfigError::EmptyPages);
        }

        let pages = parse_unique(pages, |label| {
            label
                .parse::<NavPage>()
                .map_err(|_| ConfigError::UnknownPageLabel(label.to_string()))
        })?;
        let settings = parse_unique(settings, |label| {
            label
                .parse::<SettingItem>()
                .map_err(|_| ConfigError::UnknownSettingLabel(label.to_string()))
        })?;

        Ok(Self {
            brand: DEFAULT_BRAND.to_string(),
            pages,
            settings,
        })
    }

    /// Default labels with the brand taken from `QCA_BRAND_TITLE` at build time.
    ///
    /// The client runs in the browser, so there is no runtime environment to read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_labels(&PAGE_LABELS, &SETTING_LABELS)?;
        if let Some(brand) = option_env!("QCA_BRAND_TITLE").filter(|b| !b.is_empty()) {
            config.brand = brand.to_string();
        }

        Ok(config)
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            pages: NavPage::ALL.to_vec(),
            settings: SettingItem::ALL.to_vec(),
        }
    }
}

fn parse_unique<T>(
    labels: &[&str],
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> Result<Vec<T>, ConfigError> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .map(|label| {
            if !seen.insert(*label) {
                return Err(ConfigError::DuplicateLabel(label.to_string()));
            }
            parse(*label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::client::{
        config::{NavConfig, PAGE_LABELS, SETTING_LABELS},
        error::ConfigError,
        model::{NavPage, SettingItem},
    };

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();

        assert_eq!(config.brand, "QCA", "Default brand should be QCA");
        assert_eq!(config.pages, NavPage::ALL.to_vec());
        assert_eq!(config.settings, SettingItem::ALL.to_vec());
    }

    #[test]
    fn test_default_labels_match_default_config() {
        let config = NavConfig::from_labels(&PAGE_LABELS, &SETTING_LABELS).unwrap();

        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_unknown_page_label_is_rejected() {
        let result = NavConfig::from_labels(&["Home", "Blog"], &SETTING_LABELS);

        assert_eq!(result, Err(ConfigError::UnknownPageLabel("Blog".to_string())));
    }

    #[test]
    fn test_unknown_setting_label_is_rejected() {
        let result = NavConfig::from_labels(&PAGE_LABELS, &["Profile", "Billing"]);

        assert_eq!(
            result,
            Err(ConfigError::UnknownSettingLabel("Billing".to_string()))
        );
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let result = NavConfig::from_labels(&["Home", "Questions", "Home"], &SETTING_LABELS);

        assert_eq!(result, Err(ConfigError::DuplicateLabel("Home".to_string())));
    }

    #[test]
    fn test_empty_pages_is_rejected() {
        let result = NavConfig::from_labels(&[], &SETTING_LABELS);

        assert_eq!(result, Err(ConfigError::EmptyPages));
    }

    #[test]
    fn test_subset_keeps_given_order() {
        let config = NavConfig::from_labels(&["Resources", "Home"], &["Logout"]).unwrap();

        assert_eq!(config.pages, vec![NavPage::Resources, NavPage::Home]);
        assert_eq!(config.settings, vec![SettingItem::Logout]);
    }

    #[test]
    fn test_with_brand_overrides_brand() {
        let config = NavConfig::default().with_brand("Questions & Answers");

        assert_eq!(config.brand, "Questions & Answers");
    }
}
