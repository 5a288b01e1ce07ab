use qca::client::{config::NavConfig, model::SessionState};
use qca_test_utils::TestError;

use crate::navbar::{render, render_with_config};

#[test]
/// Expect the brand to link to the root path
fn brand_links_home() -> Result<(), TestError> {
    let html = render(SessionState::default());

    html.expect_contains(r#"href="/""#)?;
    html.expect_contains(">QCA<")?;

    Ok(())
}

#[test]
/// Expect a configured brand title to replace the default
fn renders_configured_brand() -> Result<(), TestError> {
    let config = NavConfig::default().with_brand("Q and A");

    let html = render_with_config(SessionState::default(), config);

    html.expect_contains(">Q and A<")?;
    html.expect_absent(">QCA<")?;

    Ok(())
}
