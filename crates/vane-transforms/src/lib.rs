//! Content transforms applied to rendered page fragments.
//!
//! A [`ContentTransform`] maps one HTML fragment string to another. The theme
//! applies a fixed sequence of them to the extracted body markup: header
//! demotion, code-snippet formatting, cross-reference resolution. Each
//! transform consumes the previous transform's output, so the sequence is
//! order-sensitive — snippet formatting expects headers to already be at
//! their final levels, and cross-reference resolution expects code listings
//! to already be wrapped.
//!
//! Transforms are passed to the composer explicitly rather than resolved
//! through ambient helpers, so a site can swap any of them out.
//!
//! # Example
//!
//! ```
//! use vane_transforms::{ContentTransform, HeaderDemoter};
//!
//! let demoted = HeaderDemoter.apply("<h2>Usage</h2>").unwrap();
//! assert_eq!(demoted, "<h3>Usage</h3>");
//! ```

mod demote;
mod snippets;
mod xref;

pub use demote::{HeaderDemoter, demote_headers};
pub use snippets::SnippetFormatter;
pub use xref::CrossRefResolver;

/// A transform over an HTML fragment string.
///
/// Implementations are total over well-formed fragments; an input a transform
/// cannot process (such as unbalanced listing markup) is rejected with
/// [`TransformError`] and the page is not rendered.
pub trait ContentTransform {
    /// Stable name used in error reporting and logging.
    fn name(&self) -> &'static str;

    /// Apply the transform.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] if the input cannot be processed.
    fn apply(&self, html: &str) -> Result<String, TransformError>;
}

/// Error raised when a content transform rejects its input.
#[derive(Debug, thiserror::Error)]
#[error("{transform} cannot process input: {reason}")]
pub struct TransformError {
    /// Name of the failing transform.
    pub transform: &'static str,
    /// Why the input was rejected.
    pub reason: String,
}

impl TransformError {
    /// Create an error for the named transform.
    #[must_use]
    pub fn new(transform: &'static str, reason: impl Into<String>) -> Self {
        Self {
            transform,
            reason: reason.into(),
        }
    }
}
