// src/page.rs
use crate::core::html::{HtmlDocument, NodeId};
use crate::core::selector::Selector;

/// Narrow view of a live page: just enough to find candidate elements
/// and rewrite their visible text. The annotator never sees anything
/// else, so tests can drive it with a synthetic page.
pub trait Page {
    /// Elements matching the selector, in document order.
    fn select(&self, sel: &Selector) -> Vec<NodeId>;

    /// Visible text of an element.
    fn text(&self, node: NodeId) -> String;

    /// Replace an element's visible text.
    fn set_text(&mut self, node: NodeId, text: &str);
}

impl Page for HtmlDocument {
    fn select(&self, sel: &Selector) -> Vec<NodeId> {
        self.query(sel)
    }

    fn text(&self, node: NodeId) -> String {
        self.text_content(node)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.replace_text(node, text);
    }
}
