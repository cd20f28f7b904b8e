//! Header demotion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{ContentTransform, TransformError};

// Matches header tags in tag position only: `<h2`, `</h4`. The word boundary
// after the digit keeps custom elements like `<h1x-widget>` untouched, and
// matching on `<` keeps attribute values containing "h1" untouched.
static HEADER_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)[hH]([1-6])\b").unwrap());

/// Rewrite every header tag in the fragment one level down.
///
/// `h1` becomes `h2`, `h2` becomes `h3`, and so on; `h6` stays `h6` since
/// there is no deeper level. Only exact tag-name tokens are rewritten —
/// attribute values or class names containing the substring `h1` are left
/// alone.
#[must_use]
pub fn demote_headers(html: &str) -> String {
    HEADER_TAG_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let level = caps[2].as_bytes()[0] - b'0';
            format!("<{}h{}", &caps[1], (level + 1).min(6))
        })
        .into_owned()
}

/// Transform that demotes every header tag by one level.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderDemoter;

impl ContentTransform for HeaderDemoter {
    fn name(&self) -> &'static str {
        "demote-headers"
    }

    fn apply(&self, html: &str) -> Result<String, TransformError> {
        Ok(demote_headers(html))
    }
}
