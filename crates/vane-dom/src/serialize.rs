//! Canonical markup serialization.

use std::fmt::Write;

use crate::{Element, Node};

// Void elements per the HTML5 spec; serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

pub(crate) fn write_element(element: &Element, out: &mut String) {
    let _ = write!(out, "<{}", element.tag);
    for (name, value) in &element.attrs {
        let _ = write!(out, r#" {}="{}""#, name, escape_html(value));
    }
    out.push('>');

    if is_void(&element.tag) && element.children.is_empty() {
        return;
    }

    write_children(element, out);
    let _ = write!(out, "</{}>", element.tag);
}

pub(crate) fn write_children(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(e, out),
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(html) => out.push_str(html),
        }
    }
}
