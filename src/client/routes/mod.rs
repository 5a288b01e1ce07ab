pub mod contact;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod questions;
pub mod resources;
pub mod sign_up;

pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use profile::Profile;
pub use questions::Questions;
pub use resources::Resources;
pub use sign_up::SignUp;
