//! Server-side rendering of components for markup assertions.
//!
//! Components are mounted into a fresh [`VirtualDom`] and rendered once with
//! `dioxus-ssr`. Event handlers are not run, so anything a test needs to click
//! has to be reached through the component's plain logic instead.

use dioxus::prelude::*;

use crate::html::RenderedHtml;

/// Render `component` with `props` to HTML after its first build.
///
/// Props that carry event handlers cannot be built outside the runtime, so wrap
/// such components in a small harness component taking plain data props.
pub fn render_component<P: Clone + 'static>(
    component: fn(P) -> Element,
    props: P,
) -> RenderedHtml {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();

    RenderedHtml(dioxus_ssr::render(&dom))
}
