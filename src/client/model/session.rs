use crate::model::user::UserDto;

/// The authentication session as seen by the client
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserDto>,
    /// An authentication operation is in flight
    pub loading: bool,
}

impl SessionState {
    pub fn signed_in(user: UserDto) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Drop the user and any in flight state
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
