//! Feed item aggregation.
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `filter`   | Skip pattern                                     |
//! | `date`     | Publish date: metadata first, git history second |
//! | `summary`  | Description extraction from rendered HTML        |
//! | `store`    | Build-scoped items keyed by page name            |
//! | `assemble` | Sort newest first and cap the item count         |
//! | `pipeline` | Per-page and end-of-build hooks                  |

mod assemble;
mod date;
mod filter;
mod pipeline;
mod store;
pub mod summary;

pub use assemble::{assemble, newest_first};
pub use date::DateResolver;
pub use filter::SkipFilter;
pub use pipeline::FeedPipeline;
pub use store::ItemStore;

use crate::{config::SiteConfig, utils::date::PublishDate};

/// One feed entry, built from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    /// Absolute URL of the rendered page.
    pub link: String,
    pub description: String,
    /// Page name; stable across rebuilds.
    pub guid: String,
    pub pub_date: PublishDate,
    pub author: Option<String>,
}

/// Channel metadata plus the items chosen at emission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedContainer {
    pub title: String,
    pub link: String,
    pub author: String,
    pub description: String,
    pub language: Option<String>,
    pub copyright: Option<String>,
    /// Empty until the feed is assembled.
    pub items: Vec<FeedItem>,
}

impl FeedContainer {
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        Self {
            title: site.title.clone(),
            link: site.base_url().to_string(),
            author: site.author.clone(),
            description: site.description.clone(),
            language: site.language().map(str::to_string),
            copyright: site.copyright().map(str::to_string),
            items: Vec::new(),
        }
    }

    /// Date of the newest item, if any.
    pub fn updated(&self) -> Option<PublishDate> {
        self.items.iter().map(|item| item.pub_date).max()
    }
}
