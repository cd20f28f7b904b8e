//! Tree node types and structural queries.

use crate::serialize;

/// A parsed page document.
///
/// The root element is conventionally `<html>`, but the tree places no
/// requirement on it; structural expectations (such as the presence of a
/// `<body>`) are checked by consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Root element of the tree.
    pub root: Element,
}

impl Document {
    /// Create a document from its root element.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Find the first element with the given tag name, in document order.
    ///
    /// The root element itself is considered. Tag comparison is
    /// ASCII-case-insensitive, matching how HTML tag names behave.
    #[must_use]
    pub fn first_descendant(&self, tag: &str) -> Option<&Element> {
        if self.root.tag.eq_ignore_ascii_case(tag) {
            return Some(&self.root);
        }
        self.root.first_descendant(tag)
    }

    /// Remove and return the first element with the given tag name.
    ///
    /// The root element is never removed. Returns `None` if no descendant
    /// matches.
    pub fn remove_first_descendant(&mut self, tag: &str) -> Option<Element> {
        self.root.remove_first_descendant(tag)
    }
}

/// A node in the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An element with tag, attributes, and children.
    Element(Element),
    /// A text node; escaped on serialization.
    Text(String),
    /// Pre-rendered markup; emitted verbatim on serialization.
    Raw(String),
}

/// An element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. `"h1"`.
    pub tag: String,
    pub(crate) attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Get an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element carries the named attribute.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    /// Append a child node.
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Append a child element.
    pub fn push_elem(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Append a text child.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Append pre-rendered markup as a child.
    pub fn push_raw(&mut self, html: impl Into<String>) {
        self.children.push(Node::Raw(html.into()));
    }

    /// Find the first descendant element with the given tag name, depth-first.
    #[must_use]
    pub fn first_descendant(&self, tag: &str) -> Option<&Element> {
        for child in &self.children {
            if let Node::Element(element) = child {
                if element.tag.eq_ignore_ascii_case(tag) {
                    return Some(element);
                }
                if let Some(found) = element.first_descendant(tag) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Remove and return the first descendant element with the given tag name.
    pub fn remove_first_descendant(&mut self, tag: &str) -> Option<Element> {
        let position = self.children.iter().position(|child| {
            matches!(child, Node::Element(element) if element.tag.eq_ignore_ascii_case(tag))
        });
        if let Some(index) = position {
            let Node::Element(element) = self.children.remove(index) else {
                unreachable!("position matched an element node");
            };
            return Some(element);
        }
        for child in &mut self.children {
            if let Node::Element(element) = child
                && let Some(removed) = element.remove_first_descendant(tag)
            {
                return Some(removed);
            }
        }
        None
    }

    /// Serialize this element to canonical markup.
    ///
    /// Attributes are emitted in insertion order with escaped values; text
    /// children are escaped; [`Node::Raw`] children pass through verbatim.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(64);
        serialize::write_element(self, &mut out);
        out
    }

    /// Serialize the element's children only.
    #[must_use]
    pub fn inner_html(&self) -> String {
        let mut out = String::with_capacity(64);
        serialize::write_children(self, &mut out);
        out
    }
}
