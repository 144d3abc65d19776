//! Feed serialization (RSS, Atom).
//!
//! - **RSS 2.0**: default format (`rss.xml`)
//! - **Atom 1.0**: `format = "atom"`

use crate::{config::FeedFormat, feed::FeedContainer};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub mod atom;
pub mod rss;

/// Turns an assembled feed into a document.
pub trait FeedWriter: Send + Sync {
    /// Short name used as log prefix.
    fn name(&self) -> &'static str;

    fn render(&self, feed: &FeedContainer) -> Result<String>;

    /// Render and write to `path`, creating parent directories.
    fn write(&self, feed: &FeedContainer, path: &Path) -> Result<()> {
        let xml = self.render(feed)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, xml).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Writer for the configured format.
///
/// `feed_url` is where the document will be published; Atom links to it.
pub fn writer_for(format: FeedFormat, feed_url: String) -> Box<dyn FeedWriter> {
    match format {
        FeedFormat::Rss => Box::new(rss::RssWriter::new()),
        FeedFormat::Atom => Box::new(atom::AtomWriter::new().with_self_link(feed_url)),
    }
}
