//! Owned document tree for page rendering.
//!
//! The build pipeline parses each source document into a [`Document`] before
//! handing it to the theme. The tree is plain owned data: cloning it yields
//! an independent copy, which is how the theme keeps render calls from
//! mutating the caller's page.
//!
//! # Example
//!
//! ```
//! use vane_dom::{Document, Element};
//!
//! let mut body = Element::new("body");
//! let mut h1 = Element::new("h1");
//! h1.push_text("Getting Started");
//! body.push_elem(h1);
//!
//! let mut html = Element::new("html");
//! html.push_elem(body);
//! let doc = Document::new(html);
//!
//! let heading = doc.first_descendant("h1").unwrap();
//! assert_eq!(heading.to_html(), "<h1>Getting Started</h1>");
//! ```

mod node;
mod serialize;

pub use node::{Document, Element, Node};
pub use serialize::escape_html;
