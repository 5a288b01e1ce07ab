use qca::client::{config::NavConfig, model::SessionState};
use qca_test_utils::TestError;

use crate::navbar::{render, render_with_config};

#[test]
/// Expect one desktop button per page while the mobile menu is closed
fn renders_each_page_once() -> Result<(), TestError> {
    let html = render(SessionState::default());

    for label in ["Home", "Questions", "Resources", "Contact Us"] {
        assert_eq!(html.count(&format!(">{label}<")), 1, "label {label}");
    }
    html.expect_absent(r#"id="menu-appbar""#)?;
    html.expect_contains(r#"aria-controls="menu-appbar""#)?;

    Ok(())
}

#[test]
/// Expect only the configured pages to render
fn renders_configured_pages_only() -> Result<(), TestError> {
    let config = NavConfig::from_labels(&["Home", "Resources"], &["Logout"]).unwrap();

    let html = render_with_config(SessionState::default(), config);

    html.expect_contains(">Home<")?;
    html.expect_contains(">Resources<")?;
    html.expect_absent(">Questions<")?;
    html.expect_absent(">Contact Us<")?;

    Ok(())
}
