//! A live [`VirtualDom`] for tests that change state between renders.

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;

use crate::html::RenderedHtml;

/// A built virtual DOM whose state can be driven from the test.
pub struct TestDom(VirtualDom);

impl TestDom {
    /// Build `root` once with no root context
    pub fn new(root: fn() -> Element) -> Self {
        Self::build(VirtualDom::new(root))
    }

    /// Build `root` once with `context` available to every component
    pub fn with_context<T: Clone + 'static>(root: fn() -> Element, context: T) -> Self {
        Self::build(VirtualDom::new(root).with_root_context(context))
    }

    fn build(mut dom: VirtualDom) -> Self {
        dom.rebuild_in_place();
        Self(dom)
    }

    /// Run `f` inside the runtime, needed to read or write signals from a test
    pub fn in_runtime<O>(&self, f: impl FnOnce() -> O) -> O {
        self.0.in_runtime(f)
    }

    /// Re-run dirty components and render the result
    pub fn render(&mut self) -> RenderedHtml {
        self.0.render_immediate(&mut NoOpMutations);
        RenderedHtml(dioxus_ssr::render(&self.0))
    }
}
