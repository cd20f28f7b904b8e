//! Sidebar navigation rendering.

use std::fmt::Write;

use vane_dom::escape_html;

/// Collaborator producing the navigation fragment for the page shell.
///
/// The fragment is emitted verbatim inside `nav#nav > div.innertube`; it
/// needs nothing from the page being rendered.
pub trait SidebarSource {
    /// Render the sidebar markup fragment.
    fn render(&self) -> String;
}

/// Pre-rendered sidebar markup, emitted as-is.
#[derive(Clone, Debug, Default)]
pub struct StaticSidebar(pub String);

impl SidebarSource for StaticSidebar {
    fn render(&self) -> String {
        self.0.clone()
    }
}

/// A navigation entry.
#[derive(Clone, Debug)]
pub struct NavItem {
    /// Display label.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Nested entries, rendered as a sub-list.
    pub children: Vec<NavItem>,
    /// Whether this entry points at the page being rendered.
    pub is_active: bool,
}

impl NavItem {
    /// Create a leaf entry.
    #[must_use]
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            children: Vec::new(),
            is_active: false,
        }
    }
}

/// Sidebar rendering a navigation tree as nested lists.
#[derive(Clone, Debug, Default)]
pub struct NavSidebar {
    items: Vec<NavItem>,
}

impl NavSidebar {
    /// Create a sidebar from top-level navigation entries.
    #[must_use]
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }
}

impl SidebarSource for NavSidebar {
    fn render(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let mut html = String::with_capacity(256);
        html.push_str("<ul>");
        render_items(&mut html, &self.items);
        html.push_str("</ul>");
        html
    }
}

fn render_items(html: &mut String, items: &[NavItem]) {
    for item in items {
        html.push_str("<li>");
        let class_attr = if item.is_active { r#" class="active""# } else { "" };
        let _ = write!(
            html,
            r#"<a href="{}"{}>{}</a>"#,
            escape_html(&item.href),
            class_attr,
            escape_html(&item.title),
        );
        if !item.children.is_empty() {
            html.push_str("<ul>");
            render_items(html, &item.children);
            html.push_str("</ul>");
        }
        html.push_str("</li>");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn static_sidebar_passes_markup_through() {
        let sidebar = StaticSidebar("<p>hand-written</p>".to_owned());
        assert_eq!(sidebar.render(), "<p>hand-written</p>");
    }

    #[test]
    fn empty_nav_renders_nothing() {
        assert_eq!(NavSidebar::default().render(), "");
    }

    #[test]
    fn nav_renders_flat_list() {
        let sidebar = NavSidebar::new(vec![
            NavItem::new("Home", "/"),
            NavItem::new("Guide", "/guide.html"),
        ]);
        assert_eq!(
            sidebar.render(),
            r#"<ul><li><a href="/">Home</a></li><li><a href="/guide.html">Guide</a></li></ul>"#
        );
    }

    #[test]
    fn nav_marks_active_item() {
        let mut item = NavItem::new("Guide", "/guide.html");
        item.is_active = true;
        let sidebar = NavSidebar::new(vec![item]);
        assert!(sidebar.render().contains(r#"<a href="/guide.html" class="active">Guide</a>"#));
    }

    #[test]
    fn nav_renders_nested_children() {
        let mut parent = NavItem::new("Reference", "/reference/");
        parent.children.push(NavItem::new("API", "/reference/api.html"));
        let sidebar = NavSidebar::new(vec![parent]);
        assert_eq!(
            sidebar.render(),
            "<ul><li><a href=\"/reference/\">Reference</a><ul><li><a href=\"/reference/api.html\">API</a></li></ul></li></ul>"
        );
    }

    #[test]
    fn nav_escapes_titles_and_hrefs() {
        let sidebar = NavSidebar::new(vec![NavItem::new("Q&A", "/q&a.html")]);
        assert_eq!(
            sidebar.render(),
            r#"<ul><li><a href="/q&amp;a.html">Q&amp;A</a></li></ul>"#
        );
    }
}
