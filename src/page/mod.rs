//! Per-page input handed to the feed pipeline by the host build.

mod manifest;

pub use manifest::{ManifestPage, load_manifest};

use rustc_hash::FxHashMap;
use std::path::PathBuf;

/// Everything the feed needs to know about one rendered page.
///
/// Mirrors the template context a documentation builder exposes when a
/// page is written: identifiers, rendered body and the page's docinfo
/// metadata. `vars` is the writable part of that context; the pipeline
/// injects `rss_link` into it for templates.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Stable page identifier, e.g. `guide/install`.
    pub page_name: String,
    /// Template used to render the page (not consulted by the feed).
    pub template: Option<String>,
    /// Rendered page title.
    pub title: String,
    /// Rendered HTML body.
    pub body: String,
    /// Output file suffix appended to the page name in links.
    pub file_suffix: String,
    /// Source document on disk, if the page has one.
    pub source: Option<PathBuf>,
    /// Page metadata (docinfo fields such as `Publish Date` or `author`).
    pub metadata: FxHashMap<String, String>,
    /// Template variables set by hooks.
    pub vars: FxHashMap<String, String>,
}

impl PageContext {
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            file_suffix: ".html".into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Metadata value by key.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}
