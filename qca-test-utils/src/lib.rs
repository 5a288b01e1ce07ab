pub mod dom;
pub mod error;
pub mod html;
pub mod render;

pub use dom::TestDom;
pub use error::TestError;
pub use html::RenderedHtml;
pub use render::render_component;

pub mod prelude {
    pub use crate::{render_component, RenderedHtml, TestDom, TestError};
}
