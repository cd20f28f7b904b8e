//! Page layout composition.
//!
//! [`LayoutComposer`] turns one parsed [`Page`] into a complete HTML
//! document: it promotes the page's first `h1` into the heading region at
//! level 2, runs the content transforms over the remaining body markup, and
//! wraps everything in the fixed page shell with navigation and the
//! analytics include.

use vane_transforms::{
    ContentTransform, CrossRefResolver, HeaderDemoter, SnippetFormatter, TransformError,
    demote_headers,
};

use crate::head::render_head;
use crate::page::Page;
use crate::sidebar::{SidebarSource, StaticSidebar};

/// Fixed analytics include appended after the navigation region.
pub const ANALYTICS_SNIPPET: &str = r#"<!-- Piwik -->
<script type="text/javascript">
  var _paq = _paq || [];
  // tracker methods like "setCustomDimension" should be called before "trackPageView"
  _paq.push(['trackPageView']);
  _paq.push(['enableLinkTracking']);
  (function() {
    var u="//leduotang.ca/piwik/";
    _paq.push(['setTrackerUrl', u+'piwik.php']);
    _paq.push(['setSiteId', '4']);
    var d=document, g=d.createElement('script'), s=d.getElementsByTagName('script')[0];
    g.type='text/javascript'; g.async=true; g.defer=true; g.src=u+'piwik.js'; s.parentNode.insertBefore(g,s);
  })();
</script>
<!-- End Piwik Code -->"#;

/// Error returned when page rendering fails.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The document tree has no `body` element.
    #[error("document has no <body> element")]
    MalformedDocument,
    /// A content transform rejected its input.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Layout composer for the page shell.
///
/// Rendering is a pure function of the page: the composer deep-copies the
/// page tree before extracting the heading, so the caller's [`Page`] is
/// never mutated and rendering the same page twice yields identical output.
///
/// # Example
///
/// ```
/// use vane_dom::{Document, Element};
/// use vane_theme::{LayoutComposer, Page, PageMeta};
///
/// let mut h1 = Element::new("h1");
/// h1.push_text("Intro");
/// let mut body = Element::new("body");
/// body.push_elem(h1);
/// let mut html = Element::new("html");
/// html.push_elem(body);
///
/// let page = Page::new(Document::new(html), PageMeta::default());
/// let output = LayoutComposer::new().render(&page).unwrap();
/// assert!(output.contains("<h2>Intro</h2>"));
/// ```
pub struct LayoutComposer {
    transforms: Vec<Box<dyn ContentTransform>>,
    sidebar: Box<dyn SidebarSource>,
    analytics: String,
}

impl LayoutComposer {
    /// Create a composer with the default transform pipeline and an empty
    /// sidebar.
    ///
    /// The default pipeline applies, in order: header demotion, code-snippet
    /// formatting, cross-reference resolution. The order is load-bearing —
    /// each transform consumes the previous one's output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transforms: vec![
                Box::new(HeaderDemoter),
                Box::new(SnippetFormatter),
                Box::new(CrossRefResolver::without_base()),
            ],
            sidebar: Box::new(StaticSidebar::default()),
            analytics: ANALYTICS_SNIPPET.to_owned(),
        }
    }

    /// Replace the content transform pipeline.
    ///
    /// Transforms are applied in the order given.
    #[must_use]
    pub fn with_transforms(mut self, transforms: Vec<Box<dyn ContentTransform>>) -> Self {
        self.transforms = transforms;
        self
    }

    /// Set the sidebar collaborator.
    #[must_use]
    pub fn with_sidebar(mut self, sidebar: impl SidebarSource + 'static) -> Self {
        self.sidebar = Box::new(sidebar);
        self
    }

    /// Replace the analytics include.
    #[must_use]
    pub fn with_analytics(mut self, snippet: impl Into<String>) -> Self {
        self.analytics = snippet.into();
        self
    }

    /// Render a page to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MalformedDocument`] if the tree has no `body`
    /// element, or [`RenderError::Transform`] if a content transform rejects
    /// the markup it receives.
    pub fn render(&self, page: &Page) -> Result<String, RenderError> {
        // Render-local copy; the caller's tree stays intact.
        let mut dom = page.dom.clone();

        if dom.first_descendant("body").is_none() {
            return Err(RenderError::MalformedDocument);
        }

        // Show the page's first heading at level 2. Only the first h1 is
        // special-cased; any others are demoted along with the body content.
        let heading = match dom.remove_first_descendant("h1") {
            Some(h1) => demote_headers(&h1.to_html()),
            None => String::new(),
        };

        tracing::debug!(
            title = ?page.meta.title,
            has_heading = !heading.is_empty(),
            "rendering page"
        );

        let Some(body) = dom.first_descendant("body") else {
            return Err(RenderError::MalformedDocument);
        };
        let mut content = body.inner_html();
        for transform in &self.transforms {
            content = transform.apply(&content)?;
        }

        let head = render_head(&page.meta);
        let sidebar = self.sidebar.render();

        let mut html = String::with_capacity(
            head.len() + heading.len() + content.len() + sidebar.len() + self.analytics.len() + 256,
        );
        html.push_str("<!DOCTYPE html>");
        html.push_str(r#"<html lang="en-us">"#);
        html.push_str(&head);
        html.push_str("<body>");
        html.push_str(r#"<div id="wrapper">"#);
        html.push_str("<main>");
        html.push_str(r#"<div id="content">"#);
        html.push_str(r#"<div class="innertube">"#);
        html.push_str(&heading);
        html.push_str(&content);
        html.push_str("</div>");
        html.push_str("</div>");
        html.push_str("</main>");
        html.push_str(r#"<nav id="nav">"#);
        html.push_str(r#"<div class="innertube">"#);
        html.push_str(&sidebar);
        html.push_str("</div>");
        html.push_str("</nav>");
        html.push_str(&self.analytics);
        html.push_str("</div>");
        html.push_str("</body>");
        html.push_str("</html>");
        Ok(html)
    }
}

impl Default for LayoutComposer {
    fn default() -> Self {
        Self::new()
    }
}
