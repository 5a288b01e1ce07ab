use serde::{Deserialize, Serialize};

/// The signed in user as provided by the authentication session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    /// URL of the user's avatar image, if they have one
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserDto {
    /// Alt text shown for the avatar, the first name upper-cased
    pub fn avatar_alt(&self) -> String {
        self.first_name.to_uppercase()
    }

    /// First letter of the first name, used when no avatar image is set
    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::user::UserDto;

    fn user(first_name: &str) -> UserDto {
        UserDto {
            id: 1,
            first_name: first_name.to_string(),
            avatar: None,
        }
    }

    #[test]
    /// Expect alt text to be the upper-cased first name
    fn avatar_alt_is_upper_cased_first_name() {
        assert_eq!(user("ada").avatar_alt(), "ADA");
    }

    #[test]
    /// Expect an empty initial rather than a panic when the first name is empty
    fn initial_of_empty_name_is_empty() {
        assert_eq!(user("").initial(), "");
        assert_eq!(user("émile").initial(), "É");
    }

    #[test]
    /// Expect a missing avatar field to deserialize as None
    fn deserializes_without_avatar() {
        let user: UserDto =
            serde_json::from_str(r#"{"id":7,"first_name":"Grace"}"#).unwrap();

        assert_eq!(user.avatar, None);
        assert_eq!(user.first_name, "Grace");
    }
}
