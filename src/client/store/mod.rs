pub mod auth;

pub use auth::{use_auth, AuthContext};
