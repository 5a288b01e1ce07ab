//! User fixtures for rendering tests.

use qca::model::user::UserDto;

/// A signed in user with an avatar image
pub fn user_with_avatar() -> UserDto {
    UserDto {
        id: 1,
        first_name: "Ada".to_string(),
        avatar: Some("https://example.com/avatars/ada.png".to_string()),
    }
}

/// A signed in user without an avatar, rendered as an initial
pub fn user_without_avatar() -> UserDto {
    UserDto {
        id: 2,
        first_name: "Grace".to_string(),
        avatar: None,
    }
}
