use qca::client::model::SessionState;
use qca_test_utils::TestError;

use crate::{navbar::render, util::fixtures};

#[test]
/// Expect the progress bar while loading, whether or not a user is signed in
fn loading_renders_progress_bar() -> Result<(), TestError> {
    let sessions = [
        SessionState {
            user: None,
            loading: true,
        },
        SessionState {
            user: Some(fixtures::user_with_avatar()),
            loading: true,
        },
    ];

    for session in sessions {
        let html = render(session);

        html.expect_contains("<progress")?;
        html.expect_contains(r#"aria-label="Loading""#)?;
    }

    Ok(())
}

#[test]
/// Expect no progress bar when nothing is loading
fn idle_omits_progress_bar() -> Result<(), TestError> {
    let sessions = [
        SessionState::default(),
        SessionState::signed_in(fixtures::user_with_avatar()),
    ];

    for session in sessions {
        render(session).expect_absent("<progress")?;
    }

    Ok(())
}
