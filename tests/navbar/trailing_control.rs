use qca::client::model::SessionState;
use qca_test_utils::TestError;

use crate::{navbar::render, util::fixtures};

#[test]
/// Expect the login link to /sign-up and no settings menu when nobody is signed in
fn anonymous_renders_login_link() -> Result<(), TestError> {
    let html = render(SessionState::default());

    html.expect_contains(r#"href="/sign-up""#)?;
    html.expect_contains(r#"aria-label="Sign up""#)?;
    html.expect_absent("menu-user")?;
    html.expect_absent(r#"data-tip="User""#)?;
    html.expect_absent("Logout")?;

    Ok(())
}

#[test]
/// Expect the avatar image with the upper-cased first name as alt text
fn signed_in_renders_avatar() -> Result<(), TestError> {
    let html = render(SessionState::signed_in(fixtures::user_with_avatar()));

    html.expect_contains("ada.png")?;
    html.expect_contains(r#"alt="ADA""#)?;
    html.expect_contains(r#"data-tip="User""#)?;
    html.expect_absent(r#"href="/sign-up""#)?;

    Ok(())
}

#[test]
/// Expect the settings menu to stay closed until the avatar is clicked
fn settings_menu_starts_closed() -> Result<(), TestError> {
    let html = render(SessionState::signed_in(fixtures::user_with_avatar()));

    html.expect_contains(r#"aria-controls="menu-user""#)?;
    html.expect_absent(r#"id="menu-user""#)?;
    html.expect_absent("Logout")?;

    Ok(())
}

#[test]
/// Expect an initial placeholder instead of an image when the user has no avatar
fn signed_in_without_avatar_renders_placeholder() -> Result<(), TestError> {
    let html = render(SessionState::signed_in(fixtures::user_without_avatar()));

    html.expect_contains("avatar-placeholder")?;
    html.expect_contains(r#"aria-label="GRACE""#)?;
    html.expect_absent("<img")?;

    Ok(())
}
