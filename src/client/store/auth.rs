use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::model::SessionState, model::user::UserDto};

/// App-wide handle to the authentication session.
///
/// Only [`AppShell`](crate::client::components::AppShell) reads this; the
/// navigation bar itself receives the session and callbacks as props.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    state: Signal<SessionState>,
}

impl AuthContext {
    /// Install an anonymous session into the context of the current component
    pub fn provide() -> Self {
        use_context_provider(|| AuthContext {
            state: Signal::new(SessionState::default()),
        })
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn sign_in(&mut self, user: UserDto) {
        tracing::info!("Signed in user {}", user.id);
        self.state.set(SessionState::signed_in(user));
    }

    /// Clear the session. Returns immediately, callers do not wait on it.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.state.peek().user.as_ref() {
            tracing::info!("Signing out user {}", user.id);
        }
        self.state.write().clear();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.state.write().loading = loading;
    }
}

/// Retrieve the session installed by [`AuthContext::provide`]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
