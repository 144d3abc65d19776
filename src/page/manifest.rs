//! JSON page manifest read by the command-line driver.
//!
//! The manifest stands in for a host build: another tool renders the pages
//! and lists them here.
//!
//! ```json
//! [
//!   {
//!     "name": "news/release-1.0",
//!     "title": "Release 1.0",
//!     "body_path": "_build/fragments/news/release-1.0.html",
//!     "source": "news/release-1.0.rst",
//!     "metadata": { "Publish Date": "2024-03-01", "author": "Docs Team" }
//!   }
//! ]
//! ```

use super::PageContext;
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One manifest entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestPage {
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// Inline rendered body.
    pub body: Option<String>,
    /// File holding the rendered body, relative to the manifest.
    pub body_path: Option<PathBuf>,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default)]
    pub template: Option<String>,
    /// Source document, relative to the manifest.
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub metadata: FxHashMap<String, String>,
}

fn default_suffix() -> String {
    ".html".into()
}

impl ManifestPage {
    /// Resolve paths against `base` and read the body.
    pub fn into_context(self, base: &Path) -> Result<PageContext> {
        let body = match (self.body, &self.body_path) {
            (Some(body), None) => body,
            (None, Some(path)) => {
                let path = base.join(path);
                fs::read_to_string(&path)
                    .with_context(|| format!("failed to read body of `{}` from {}", self.name, path.display()))?
            }
            (Some(_), Some(_)) => bail!("page `{}` sets both `body` and `body_path`", self.name),
            (None, None) => bail!("page `{}` has neither `body` nor `body_path`", self.name),
        };

        Ok(PageContext {
            page_name: self.name,
            template: self.template,
            title: self.title,
            body,
            file_suffix: self.suffix,
            source: self.source.map(|p| base.join(p)),
            metadata: self.metadata,
            vars: FxHashMap::default(),
        })
    }
}

/// Read a manifest file into page contexts.
pub fn load_manifest(path: &Path) -> Result<Vec<PageContext>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read page manifest {}", path.display()))?;
    let pages: Vec<ManifestPage> = serde_json::from_str(&content)
        .with_context(|| format!("invalid page manifest {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    pages
        .into_iter()
        .map(|page| page.into_context(base))
        .collect()
}
