//! Page model and metadata.
//!
//! A [`Page`] pairs the parsed document tree with the metadata the build
//! pipeline collected for it. Metadata is authored in YAML sidecar files and
//! merged by the pipeline; the theme only reads it. All fields are optional —
//! a missing value renders as an empty string, never as an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use vane_dom::Document;

/// One source document, parsed and ready to render.
///
/// Owned by the caller for the duration of a render call and discarded
/// afterwards. Rendering never mutates it; the composer works on a copy of
/// the tree.
#[derive(Clone, Debug)]
pub struct Page {
    /// Parsed document tree of the page's raw content.
    pub dom: Document,
    /// Metadata collected by the build pipeline.
    pub meta: PageMeta,
}

impl Page {
    /// Create a page from its parsed tree and metadata.
    #[must_use]
    pub fn new(dom: Document, meta: PageMeta) -> Self {
        Self { dom, meta }
    }
}

/// Page metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Page title, shown in the document title alongside the site name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Site-wide metadata.
    #[serde(default, skip_serializing_if = "SiteMeta::is_empty")]
    pub site: SiteMeta,

    /// Custom variables for site-specific templating.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub vars: HashMap<String, serde_json::Value>,
}

impl PageMeta {
    /// Parse metadata from YAML content.
    ///
    /// Empty content yields a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, MetadataError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed).map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}")))
    }

    /// Check if metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.site.is_empty() && self.vars.is_empty()
    }
}

/// Site-wide metadata shared by every page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site author, emitted in the head's author meta tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Site name, appended to every document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Root of the API documentation tree used for cross-reference links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl SiteMeta {
    /// Check if site metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.name.is_none() && self.base_url.is_none()
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_yaml() {
        let meta = PageMeta::from_yaml("").unwrap();
        assert!(meta.is_empty());
    }

    #[test]
    fn test_parse_whitespace_only() {
        let meta = PageMeta::from_yaml("   \n\t  ").unwrap();
        assert!(meta.is_empty());
    }

    #[test]
    fn test_parse_title_only() {
        let meta = PageMeta::from_yaml("title: Intro").unwrap();
        assert_eq!(meta.title, Some("Intro".to_owned()));
        assert!(meta.site.is_empty());
        assert!(meta.vars.is_empty());
    }

    #[test]
    fn test_parse_all_fields() {
        let yaml = r#"
title: "Getting Started"
site:
  author: "A. Writer"
  name: Docs
  base_url: /doc/api
vars:
  section: guides
  order: 2
"#;
        let meta = PageMeta::from_yaml(yaml).unwrap();
        assert_eq!(meta.title, Some("Getting Started".to_owned()));
        assert_eq!(meta.site.author, Some("A. Writer".to_owned()));
        assert_eq!(meta.site.name, Some("Docs".to_owned()));
        assert_eq!(meta.site.base_url, Some("/doc/api".to_owned()));
        assert_eq!(meta.vars.get("section"), Some(&serde_json::json!("guides")));
        assert_eq!(meta.vars.get("order"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = PageMeta::from_yaml("title: [invalid yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_field_ignored() {
        let meta = PageMeta::from_yaml("title: Test\nunknown_field: value\n").unwrap();
        assert_eq!(meta.title, Some("Test".to_owned()));
    }

    #[test]
    fn test_is_empty_with_site_name() {
        let meta = PageMeta {
            site: SiteMeta {
                name: Some("Docs".to_owned()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }
}
