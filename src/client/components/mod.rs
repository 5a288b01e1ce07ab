pub mod brand_link;
pub mod layout;
pub mod loading_indicator;
pub mod navbar;
pub mod page;

pub use brand_link::BrandLink;
pub use layout::AppShell;
pub use loading_indicator::LoadingIndicator;
pub use navbar::NavBar;
pub use page::Page;
