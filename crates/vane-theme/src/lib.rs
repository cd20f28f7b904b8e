//! Page layout and head rendering for the vane theme.
//!
//! This crate turns parsed page documents into final HTML. It provides:
//! - [`LayoutComposer`]: heading promotion, content transforms, and the
//!   fixed page shell with navigation and analytics markup
//! - [`render_head`]: the document head fragment
//! - [`Page`] / [`PageMeta`]: the unit of work and its metadata
//!
//! Parsing source documents into the tree and discovering navigation are the
//! build pipeline's job; this crate starts from a finished [`Page`] and
//! produces one complete HTML document string per call.
//!
//! # Quick Start
//!
//! ```
//! use vane_dom::{Document, Element};
//! use vane_theme::{LayoutComposer, Page, PageMeta};
//!
//! let mut h1 = Element::new("h1");
//! h1.push_text("Getting Started");
//! let mut body = Element::new("body");
//! body.push_elem(h1);
//! let mut html = Element::new("html");
//! html.push_elem(body);
//!
//! let meta = PageMeta::from_yaml("title: Getting Started\nsite:\n  name: Docs\n")?;
//! let page = Page::new(Document::new(html), meta);
//!
//! let html = LayoutComposer::new().render(&page)?;
//! assert!(html.contains("<title>Getting Started - Docs</title>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod head;
mod layout;
mod page;
mod sidebar;

pub use head::render_head;
pub use layout::{ANALYTICS_SNIPPET, LayoutComposer, RenderError};
pub use page::{MetadataError, Page, PageMeta, SiteMeta};
pub use sidebar::{NavItem, NavSidebar, SidebarSource, StaticSidebar};

// Re-export the transform interface for convenience
pub use vane_transforms::{ContentTransform, TransformError};
