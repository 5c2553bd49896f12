//! Drawing surface capability.
//!
//! The renderer never touches pixels. It appends groups and primitives to a
//! retained-mode scene graph through this trait, sets their attributes and
//! styles, and clears a container before redrawing into it.
//! [`Document`](crate::document::Document) is the bundled implementation.

/// A retained-mode, DOM-like scene graph the renderer can draw into.
pub trait Surface {
    /// Handle to an element owned by the surface.
    type Node: Copy;

    /// Find the first element matching `selector`.
    fn select(&self, selector: &str) -> Option<Self::Node>;

    /// Width available to `node` from its parent element, if known.
    fn available_width(&self, node: Self::Node) -> Option<f64>;

    /// Remove every child of `node`.
    fn clear(&mut self, node: Self::Node);

    /// Append a new `tag` element as the last child of `parent`.
    fn append(&mut self, parent: Self::Node, tag: &str) -> Self::Node;

    fn set_attr(&mut self, node: Self::Node, name: &str, value: &str);

    fn set_style(&mut self, node: Self::Node, name: &str, value: &str);

    fn set_text(&mut self, node: Self::Node, text: &str);
}

/// Format a coordinate or length for an attribute value.
///
/// Two decimals, trailing zeros dropped (`12.50` → `12.5`, `3.00` → `3`).
pub fn num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
