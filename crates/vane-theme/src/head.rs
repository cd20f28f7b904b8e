//! Document head rendering.

use std::fmt::Write;

use vane_dom::escape_html;

use crate::PageMeta;

/// Render the document `<head>` fragment for a page.
///
/// Emits a fixed sequence of meta, link, and script tags, interpolating the
/// page title, site name, and site author. Missing metadata interpolates as
/// an empty string; this function has no failure modes.
#[must_use]
pub fn render_head(meta: &PageMeta) -> String {
    let title = meta.title.as_deref().unwrap_or("");
    let author = meta.site.author.as_deref().unwrap_or("");
    let site_name = meta.site.name.as_deref().unwrap_or("");

    let mut html = String::with_capacity(1024);
    html.push_str("<head>");
    html.push_str(r#"<meta http-equiv="content-type" content="text/html; charset=utf-8">"#);

    // Enable responsiveness on mobile devices
    html.push_str(
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1">"#,
    );
    let _ = write!(html, r#"<meta name="author" content="{}">"#, escape_html(author));
    let _ = write!(
        html,
        "<title>{} - {}</title>",
        escape_html(title),
        escape_html(site_name)
    );

    // CSS
    html.push_str(r#"<link rel="stylesheet" href="/css/syntax.css">"#);
    html.push_str(r#"<link rel="stylesheet" href="/css/screen.css">"#);

    // Syntax highlighting
    html.push_str(r#"<link rel="stylesheet" href="/assets/js/styles/default.css">"#);
    html.push_str(r#"<script src="/assets/js/highlight.pack.js"></script>"#);
    html.push_str("<script>hljs.initHighlightingOnLoad();</script>");

    // RSS
    html.push_str(
        r#"<!-- <link rel="alternate" type="application/rss+xml" title="RSS" href="/atom.xml"> -->"#,
    );
    html.push_str("</head>");
    html
}
