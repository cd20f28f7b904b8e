//! Cross-reference placeholder resolution.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use vane_dom::escape_html;

use crate::{ContentTransform, TransformError};

static XREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@(link|code)\s+([^}]+)\}").unwrap());

/// Transform that resolves `{@link …}` and `{@code …}` placeholders.
///
/// `{@link pkg.Type#member label}` becomes a hyperlink into the configured
/// API documentation tree: the dotted type path maps to a `.html` page and
/// the member (if any) to a fragment anchor. The label after the reference is
/// optional; when absent, the type's short name plus member is used.
/// `{@code …}` renders its argument as inline `<code>`.
///
/// Without a base URL, references cannot be turned into hyperlinks and
/// degrade to inline code with a warning.
#[derive(Clone, Debug, Default)]
pub struct CrossRefResolver {
    base_url: Option<String>,
}

impl CrossRefResolver {
    const NAME: &'static str = "cross-references";

    /// Create a resolver linking against the given API documentation root,
    /// e.g. `"/doc/api"` or an absolute URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: (!base_url.is_empty()).then_some(base_url),
        }
    }

    /// Create a resolver with no link target; references render as code.
    #[must_use]
    pub fn without_base() -> Self {
        Self { base_url: None }
    }

    fn resolve(&self, caps: &Captures<'_>) -> String {
        let argument = caps[2].trim();
        if &caps[1] == "code" {
            return format!("<code>{}</code>", escape_html(argument));
        }

        let (reference, label) = match argument.split_once(char::is_whitespace) {
            Some((reference, label)) => (reference, Some(label.trim())),
            None => (argument, None),
        };
        let (type_path, member) = match reference.split_once('#') {
            Some((type_path, member)) => (type_path, Some(member)),
            None => (reference, None),
        };

        let label = label.map_or_else(|| short_label(type_path, member), ToOwned::to_owned);

        // References without a type path ({@link #member}) are relative to a
        // page this resolver does not know about.
        if type_path.is_empty() {
            tracing::warn!(
                reference = %reference,
                "cross-reference has no type path, leaving it as plain code"
            );
            return format!("<code>{}</code>", escape_html(&label));
        }

        let Some(base) = &self.base_url else {
            tracing::warn!(
                reference = %reference,
                "no API base URL configured, leaving cross-reference as plain code"
            );
            return format!("<code>{}</code>", escape_html(&label));
        };

        let mut href = String::with_capacity(base.len() + reference.len() + 8);
        href.push_str(base.trim_end_matches('/'));
        for segment in type_path.split('.') {
            href.push('/');
            href.push_str(segment);
        }
        href.push_str(".html");
        if let Some(member) = member {
            let _ = write!(href, "#{member}");
        }

        format!(
            r#"<a href="{}"><code>{}</code></a>"#,
            escape_html(&href),
            escape_html(&label)
        )
    }
}

/// Default label for an unlabeled reference: short type name plus member.
fn short_label(type_path: &str, member: Option<&str>) -> String {
    let short = type_path.rsplit('.').next().unwrap_or(type_path);
    match member {
        Some(member) if short.is_empty() => member.to_owned(),
        Some(member) => format!("{short}#{member}"),
        None => short.to_owned(),
    }
}

impl ContentTransform for CrossRefResolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, html: &str) -> Result<String, TransformError> {
        Ok(XREF_RE
            .replace_all(html, |caps: &Captures<'_>| self.resolve(caps))
            .into_owned())
    }
}
