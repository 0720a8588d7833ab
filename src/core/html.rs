// src/core/html.rs
//
// Arena-backed element tree for saved forecast pages. Tolerant,
// best-effort parsing in the same spirit as the rest of the crate:
// case-insensitive tags, raw attribute text kept verbatim, stray
// close tags ignored. Untouched markup serializes back out as-is;
// comments, doctype and script/style bodies are carried through
// opaquely and never count as visible text.

use crate::core::sanitize;
use crate::core::selector::Selector;

pub type NodeId = usize;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

#[derive(Debug)]
pub enum NodeKind {
    /// `tag` as written in the source; `attrs` is everything between
    /// the tag name and '>', leading whitespace included.
    Element { tag: String, attrs: String },
    /// Markup text, entities still encoded.
    Text(String),
    /// Comments, doctype, processing junk, script/style bodies.
    Raw(String),
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

pub struct HtmlDocument {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Value of a named attribute inside a raw attribute string.
/// Case-insensitive on the name; handles `a="v"`, `a='v'` and bare `a=v`.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(attrs);
    let nl = to_lower(name);
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&nl) {
        let at = from + rel;
        let before_ok = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        let mut j = at + nl.len();
        while j < attrs.len() && attrs.as_bytes()[j].is_ascii_whitespace() {
            j += 1;
        }
        if before_ok && j < attrs.len() && attrs.as_bytes()[j] == b'=' {
            j += 1;
            while j < attrs.len() && attrs.as_bytes()[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < attrs.len() {
                let q = attrs.as_bytes()[j];
                if q == b'"' || q == b'\'' {
                    let end = attrs[j + 1..].find(q as char)? + j + 1;
                    return Some(&attrs[j + 1..end]);
                }
                let end = attrs[j..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .map(|p| j + p)
                    .unwrap_or(attrs.len());
                return Some(&attrs[j..end]);
            }
        }
        from = at + nl.len();
    }
    None
}

pub fn has_class(attrs: &str, class: &str) -> bool {
    attr_value(attrs, "class")
        .map(|v| v.split_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        let mut doc = HtmlDocument { nodes: Vec::new(), roots: Vec::new() };
        let mut stack: Vec<NodeId> = Vec::new();
        let mut i = 0;

        while i < html.len() {
            let rest = &html[i..];

            // Text run up to the next tag.
            if !rest.starts_with('<') {
                let end = rest.find('<').map(|p| i + p).unwrap_or(html.len());
                doc.push(NodeKind::Text(s!(&html[i..end])), stack.last().copied());
                i = end;
                continue;
            }

            // Close tag: pop to the nearest matching open, or ignore.
            if rest.starts_with("</") {
                let gt = rest.find('>');
                let end = gt.map(|p| i + p + 1).unwrap_or(html.len());
                let name_end = gt.map(|p| i + p).unwrap_or(html.len());
                let name = html[i + 2..name_end].trim();
                if let Some(pos) = stack.iter().rposition(|&id| doc.tag_eq(id, name)) {
                    stack.truncate(pos);
                } else {
                    logd!("parse: stray </{}> ignored", name);
                }
                i = end;
                continue;
            }

            // Comments, doctype, processing instructions: kept verbatim.
            if rest.starts_with("<!--") {
                let end = rest.find("-->").map(|p| i + p + 3).unwrap_or(html.len());
                doc.push(NodeKind::Raw(s!(&html[i..end])), stack.last().copied());
                i = end;
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                let end = rest.find('>').map(|p| i + p + 1).unwrap_or(html.len());
                doc.push(NodeKind::Raw(s!(&html[i..end])), stack.last().copied());
                i = end;
                continue;
            }

            // A '<' that doesn't open a tag is just text.
            if !rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                let end = rest[1..].find('<').map(|p| i + 1 + p).unwrap_or(html.len());
                doc.push(NodeKind::Text(s!(&html[i..end])), stack.last().copied());
                i = end;
                continue;
            }

            // Open tag.
            let Some(gt) = rest.find('>') else {
                doc.push(NodeKind::Text(s!(rest)), stack.last().copied());
                break;
            };
            let inner = &rest[1..gt];
            let name_end = inner
                .find(|c: char| c.is_ascii_whitespace() || c == '/')
                .unwrap_or(inner.len());
            let tag = &inner[..name_end];
            let attrs = &inner[name_end..];
            let self_closing = inner.trim_end().ends_with('/');
            let id = doc.push(
                NodeKind::Element { tag: s!(tag), attrs: s!(attrs) },
                stack.last().copied(),
            );
            i += gt + 1;

            if self_closing || is_void(tag) {
                continue;
            }
            if is_raw_text(tag) {
                // Body runs verbatim to the matching close tag.
                let lc = to_lower(&html[i..]);
                let close_pat = join!("</", &to_lower(tag));
                match lc.find(&close_pat) {
                    Some(p) => {
                        if p > 0 {
                            doc.push(NodeKind::Raw(s!(&html[i..i + p])), Some(id));
                        }
                        i = html[i + p..].find('>').map(|q| i + p + q + 1).unwrap_or(html.len());
                    }
                    None => {
                        doc.push(NodeKind::Raw(s!(&html[i..])), Some(id));
                        i = html.len();
                    }
                }
                continue;
            }
            stack.push(id);
        }
        doc
    }

    fn push(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { kind, parent, children: Vec::new() });
        match parent {
            Some(p) => self.nodes[p].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn tag_eq(&self, id: NodeId, name: &str) -> bool {
        matches!(&self.nodes[id].kind,
            NodeKind::Element { tag, .. } if tag.eq_ignore_ascii_case(name))
    }

    /// Elements matching the selector, in document order.
    pub fn query(&self, sel: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &r in &self.roots {
            self.walk(r, sel, &mut out);
        }
        out
    }

    fn walk(&self, id: NodeId, sel: &Selector, out: &mut Vec<NodeId>) {
        if self.matches(id, sel) {
            out.push(id);
        }
        if matches!(self.nodes[id].kind, NodeKind::Element { .. }) {
            for &c in &self.nodes[id].children {
                self.walk(c, sel, out);
            }
        }
    }

    fn matches(&self, id: NodeId, sel: &Selector) -> bool {
        let NodeKind::Element { tag, attrs } = &self.nodes[id].kind else {
            return false;
        };
        if !tag.eq_ignore_ascii_case(&sel.tag) {
            return false;
        }
        if let Some(class) = &sel.class {
            if !has_class(attrs, class) {
                return false;
            }
        }
        match &sel.ancestor_id {
            None => true,
            Some(want) => {
                let mut cur = self.nodes[id].parent;
                while let Some(p) = cur {
                    if let NodeKind::Element { attrs, .. } = &self.nodes[p].kind {
                        // ids compare exactly, unlike tags/classes
                        if attr_value(attrs, "id") == Some(want.as_str()) {
                            return true;
                        }
                    }
                    cur = self.nodes[p].parent;
                }
                false
            }
        }
    }

    /// Visible text of an element: descendant text runs concatenated,
    /// entities decoded. Comments and script/style bodies are skipped.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = s!();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id].kind {
            NodeKind::Text(raw) => out.push_str(&sanitize::normalize_entities(raw)),
            NodeKind::Raw(_) => {}
            NodeKind::Element { .. } => {
                for &c in &self.nodes[id].children {
                    self.collect_text(c, out);
                }
            }
        }
    }

    /// Replace an element's children with a single text node.
    /// The detached subtree stays in the arena but no longer
    /// serializes or matches queries.
    pub fn replace_text(&mut self, id: NodeId, text: &str) {
        if !matches!(self.nodes[id].kind, NodeKind::Element { .. }) {
            return;
        }
        self.nodes[id].children.clear();
        self.push(NodeKind::Text(sanitize::escape_text(text)), Some(id));
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len() * 16);
        for &r in &self.roots {
            self.write_node(r, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id].kind {
            NodeKind::Text(raw) | NodeKind::Raw(raw) => out.push_str(raw),
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                out.push_str(attrs);
                out.push('>');
                if attrs.trim_end().ends_with('/') || is_void(tag) {
                    return;
                }
                for &c in &self.nodes[id].children {
                    self.write_node(c, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
