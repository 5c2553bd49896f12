//! In-memory scene graph: a minimal DOM that implements [`Surface`] and
//! serializes to SVG/XML markup.
//!
//! A `Document` can start empty ([`Document::new`]) or be imported from host
//! markup ([`Document::parse`]) so a fretboard can be drawn into an existing
//! page template by id.

use crate::error::Result;
use crate::surface::Surface;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            parent,
            ..Self::default()
        }
    }
}

/// Arena-backed element tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    /// Slots released by [`Surface::clear`], reused by later appends.
    free: Vec<usize>,
    root: NodeId,
}

impl Document {
    /// Create a document holding a single `root_tag` element.
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Element::new(root_tag, None)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    /// Import host markup (XHTML or SVG). Element names, attributes, inline
    /// `style` declarations and text content are kept; comments and
    /// processing instructions are dropped. Namespace prefixes (`xlink:href`)
    /// and the prefixed `xmlns:*` declarations that bind them are kept too.
    pub fn parse(markup: &str) -> Result<Self> {
        let xml = roxmltree::Document::parse(markup)?;
        let root_el = xml.root_element();
        let tag = qualified_name(root_el, root_el.tag_name().namespace(), root_el.tag_name().name());
        let mut doc = Self::new(&tag);
        let root = doc.root;
        doc.import(root, root_el);
        Ok(doc)
    }

    fn import(&mut self, target: NodeId, source: roxmltree::Node) {
        let inherited = source.parent_element();
        for ns in source.namespaces() {
            let Some(prefix) = ns.name() else { continue };
            let declared_above = inherited
                .is_some_and(|p| p.lookup_namespace_uri(Some(prefix)) == Some(ns.uri()));
            if prefix != "xml" && !declared_above {
                self.set_attr(target, &format!("xmlns:{prefix}"), ns.uri());
            }
        }

        for attr in source.attributes() {
            if attr.namespace().is_some() {
                let name = qualified_name(source, attr.namespace(), attr.name());
                self.set_attr(target, &name, attr.value());
            } else if attr.name() == "style" {
                for decl in attr.value().split(';') {
                    if let Some((name, value)) = decl.split_once(':') {
                        self.set_style(target, name.trim(), value.trim());
                    }
                }
            } else {
                self.set_attr(target, attr.name(), attr.value());
            }
        }

        let text: String = source
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .collect();
        let text = text.trim();
        if !text.is_empty() {
            self.set_text(target, text);
        }

        for child in source.children().filter(|c| c.is_element()) {
            let tag = qualified_name(child, child.tag_name().namespace(), child.tag_name().name());
            let node = self.append(target, &tag);
            self.import(node, child);
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        lookup(&self.nodes[node.0].attrs, name)
    }

    pub fn style(&self, node: NodeId, name: &str) -> Option<&str> {
        lookup(&self.nodes[node.0].styles, name)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].text.as_deref()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// All elements below `node` in document order, `node` excluded.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.attr(node, "id") == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.attr(node, "class")
                .is_some_and(|c| c.split_whitespace().any(|token| token == class))
        } else {
            self.tag(node) == selector
        }
    }

    /// Serialize the whole document.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_element(&mut out, self.root, 0, false);
        out
    }

    /// Serialize the subtree at `node` as standalone SVG, declaring the SVG
    /// namespace on the outermost `svg` element.
    pub fn svg_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_element(&mut out, node, 0, true);
        out
    }

    fn write_element(&self, out: &mut String, node: NodeId, depth: usize, declare_ns: bool) {
        let el = &self.nodes[node.0];
        let indent = "  ".repeat(depth);

        out.push_str(&indent);
        out.push('<');
        out.push_str(&el.tag);
        if declare_ns && el.tag == "svg" && lookup(&el.attrs, "xmlns").is_none() {
            out.push_str(&format!(r#" xmlns="{SVG_NAMESPACE}""#));
        }
        for (name, value) in &el.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_attr(value)));
        }
        if !el.styles.is_empty() {
            let decls: Vec<String> = el.styles.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            out.push_str(&format!(r#" style="{}""#, escape_attr(&decls.join("; "))));
        }

        if el.text.is_none() && el.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push('>');
        if let Some(ref text) = el.text {
            out.push_str(&escape_text(text));
        }
        if !el.children.is_empty() {
            out.push('\n');
            // The namespace only needs declaring once.
            let child_ns = declare_ns && el.tag != "svg";
            for &child in &el.children {
                self.write_element(out, child, depth + 1, child_ns);
            }
            out.push_str(&indent);
        }
        out.push_str(&format!("</{}>\n", el.tag));
    }
}

impl Surface for Document {
    type Node = NodeId;

    fn select(&self, selector: &str) -> Option<NodeId> {
        if self.matches(self.root, selector) {
            return Some(self.root);
        }
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.matches(n, selector))
    }

    fn available_width(&self, node: NodeId) -> Option<f64> {
        let parent = self.parent(node)?;
        let width = self.attr(parent, "width")?;
        width.trim().trim_end_matches("px").trim().parse().ok()
    }

    fn clear(&mut self, node: NodeId) {
        let released = self.descendants(node);
        self.nodes[node.0].children.clear();
        for n in released {
            self.nodes[n.0] = Element::default();
            self.free.push(n.0);
        }
    }

    fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let el = Element::new(tag, Some(parent));
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = el;
                NodeId(slot)
            }
            None => {
                self.nodes.push(el);
                NodeId(self.nodes.len() - 1)
            }
        };
        self.nodes[parent.0].children.push(id);
        id
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        upsert(&mut self.nodes[node.0].attrs, name, value);
    }

    fn set_style(&mut self, node: NodeId, name: &str, value: &str) {
        upsert(&mut self.nodes[node.0].styles, name, value);
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].text = Some(text.to_string());
    }
}

/// `prefix:local` when `namespace` is bound to a prefix at `node`.
fn qualified_name(node: roxmltree::Node, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((name.to_string(), value.to_string())),
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
