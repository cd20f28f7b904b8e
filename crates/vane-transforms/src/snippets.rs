//! Code snippet formatting for client-side syntax highlighting.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use vane_dom::escape_html;

use crate::{ContentTransform, TransformError};

static PRE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<pre\b").unwrap());

static PRE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</pre>").unwrap());

static PRE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre\b([^>]*)>(.*?)</pre>").unwrap());

static CODE_WRAPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*<code\b([^>]*)>(.*)</code>\s*$").unwrap());

static DATA_LANG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-lang\s*=\s*"([^"]+)""#).unwrap());

static CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class\s*=\s*"([^"]*)""#).unwrap());

/// Transform that normalizes embedded code listings for highlight.js.
///
/// The head block loads `highlight.pack.js`, which expects listings in
/// `<pre><code class="language-…">` form. Source documents arrive with
/// listings in several shapes — `<pre data-lang="java">`, `<pre><code
/// class="java">`, or a bare `<pre>` — and this transform rewrites them all
/// to the canonical form. Listing bodies that still contain raw markup
/// characters are entity-escaped; already-escaped bodies pass through
/// unchanged. Listings without a detectable language are left for
/// highlight.js auto-detection.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnippetFormatter;

impl SnippetFormatter {
    const NAME: &'static str = "code-snippets";

    fn format_block(caps: &Captures<'_>) -> String {
        let pre_attrs = &caps[1];
        let inner = &caps[2];

        // Language hint: <pre data-lang="…"> wins, then the <code> class.
        let mut lang = DATA_LANG_RE
            .captures(pre_attrs)
            .map(|c| c[1].to_owned());

        let body = match CODE_WRAPPER_RE.captures(inner) {
            Some(code) => {
                if lang.is_none() {
                    lang = language_from_class(&code[1]);
                }
                code[2].to_owned()
            }
            None => inner.to_owned(),
        };

        let body = if body.contains('<') || body.contains('>') {
            escape_html(&body)
        } else {
            body
        };

        let mut out = String::with_capacity(body.len() + 48);
        match lang {
            Some(lang) => {
                let _ = write!(out, r#"<pre><code class="language-{}">"#, escape_html(&lang));
            }
            None => out.push_str("<pre><code>"),
        }
        out.push_str(&body);
        out.push_str("</code></pre>");
        out
    }
}

/// Pull a language token out of a `<code>` class attribute.
///
/// A `language-x` token wins; otherwise the first class token is taken as
/// the language name, matching how listings are commonly authored.
fn language_from_class(code_attrs: &str) -> Option<String> {
    let classes = CLASS_RE.captures(code_attrs)?;
    let classes = &classes[1];
    for token in classes.split_ascii_whitespace() {
        if let Some(lang) = token.strip_prefix("language-") {
            return Some(lang.to_owned());
        }
    }
    classes
        .split_ascii_whitespace()
        .next()
        .map(ToOwned::to_owned)
}

impl ContentTransform for SnippetFormatter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, html: &str) -> Result<String, TransformError> {
        let opens = PRE_OPEN_RE.find_iter(html).count();
        let closes = PRE_CLOSE_RE.find_iter(html).count();
        if opens != closes {
            return Err(TransformError::new(
                Self::NAME,
                format!("unbalanced listing markup: {opens} <pre> against {closes} </pre>"),
            ));
        }

        Ok(PRE_BLOCK_RE
            .replace_all(html, |caps: &Captures<'_>| Self::format_block(caps))
            .into_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_data_lang_attribute_becomes_language_class() {
        let input = r#"<pre data-lang="java">int x = 0;</pre>"#;
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(
            output,
            r#"<pre><code class="language-java">int x = 0;</code></pre>"#
        );
    }

    #[test]
    fn test_code_class_is_normalized() {
        let input = r#"<pre><code class="python">print(1)</code></pre>"#;
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(
            output,
            r#"<pre><code class="language-python">print(1)</code></pre>"#
        );
    }

    #[test]
    fn test_language_class_passes_through() {
        let input = r#"<pre><code class="language-rust">fn main() {}</code></pre>"#;
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(
            output,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_bare_listing_left_for_autodetection() {
        let input = "<pre>plain listing</pre>";
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(output, "<pre><code>plain listing</code></pre>");
    }

    #[test]
    fn test_raw_markup_characters_are_escaped() {
        let input = r#"<pre data-lang="xml"><config/></pre>"#;
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(
            output,
            r#"<pre><code class="language-xml">&lt;config/&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_escaped_body_passes_through() {
        let input = r#"<pre data-lang="xml">&lt;config/&gt;</pre>"#;
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(
            output,
            r#"<pre><code class="language-xml">&lt;config/&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_surrounding_markup_untouched() {
        let input = r#"<p>before</p><pre data-lang="c">x;</pre><p>after</p>"#;
        let output = SnippetFormatter.apply(input).unwrap();
        assert_eq!(
            output,
            r#"<p>before</p><pre><code class="language-c">x;</code></pre><p>after</p>"#
        );
    }

    #[test]
    fn test_unbalanced_markup_is_rejected() {
        let err = SnippetFormatter
            .apply("<pre>one</pre><pre>dangling")
            .unwrap_err();
        assert_eq!(err.transform, "code-snippets");
        assert!(err.reason.contains("unbalanced"));
    }

    #[test]
    fn test_no_listings_is_identity() {
        let input = "<p>No code here.</p>";
        assert_eq!(SnippetFormatter.apply(input).unwrap(), input);
    }
}
