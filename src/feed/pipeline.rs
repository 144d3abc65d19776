//! Per-page and end-of-build hooks.
//!
//! A host creates one [`FeedPipeline`] when the build starts, calls
//! [`FeedPipeline::on_page`] for every rendered page (possibly from several
//! threads), and [`FeedPipeline::on_build_finished`] once after the last page.

use super::{
    DateResolver, FeedContainer, FeedItem, ItemStore, SkipFilter, assemble, summary::sanitize,
};
use crate::{
    config::SiteConfig,
    debug,
    error::PageError,
    generator::feed::{FeedWriter, writer_for},
    log,
    page::PageContext,
    utils::git::HistoryProvider,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Template variable pointing at the feed file.
pub const RSS_LINK_VAR: &str = "rss_link";

pub struct FeedPipeline {
    config: SiteConfig,
    filter: SkipFilter,
    max_items: Option<usize>,
    history: Box<dyn HistoryProvider>,
    writer: Box<dyn FeedWriter>,
    container: FeedContainer,
    store: ItemStore,
}

impl FeedPipeline {
    /// Resolve settings and set up build state.
    ///
    /// Fails on an invalid skip pattern or item limit, before any page is
    /// seen.
    pub fn new(config: SiteConfig, history: Box<dyn HistoryProvider>) -> Result<Self> {
        let filter = SkipFilter::new(config.feed.skip_pattern()?);
        let max_items = config.feed.max_items()?;
        let writer = writer_for(config.feed.format, config.feed_url());
        let container = FeedContainer::from_config(&config);

        Ok(Self {
            config,
            filter,
            max_items,
            history,
            writer,
            container,
            store: ItemStore::new(),
        })
    }

    /// Replace the serializer (e.g. for a host-specific format).
    pub fn with_writer(mut self, writer: Box<dyn FeedWriter>) -> Self {
        self.writer = writer;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Process one rendered page.
    ///
    /// Returns the stored item, or `None` when the page is skipped. Page
    /// problems are logged and never abort the build.
    pub fn on_page(&self, ctx: &mut PageContext) -> Option<FeedItem> {
        if self.filter.is_excluded(&ctx.page_name) {
            log!("skip"; "{}", ctx.page_name);
            return None;
        }

        match self.build_item(ctx) {
            Ok(Some(item)) => {
                ctx.vars
                    .insert(RSS_LINK_VAR.to_string(), self.config.feed_url());
                self.store.put(ctx.page_name.clone(), item.clone());
                Some(item)
            }
            Ok(None) => {
                debug!("feed"; "no publish date for {}, skipped", ctx.page_name);
                None
            }
            Err(e) => {
                log!("feed"; "skipping {}: {}", ctx.page_name, e);
                None
            }
        }
    }

    /// Date first: undated pages never pay for sanitizing.
    fn build_item(&self, ctx: &PageContext) -> Result<Option<FeedItem>, PageError> {
        let resolver = DateResolver::new(&self.config.feed.date_field, self.history.as_ref());
        let Some(pub_date) = resolver.resolve(ctx)? else {
            return Ok(None);
        };

        let description = sanitize(&ctx.body, self.config.feed.summary_length)?;

        Ok(Some(FeedItem {
            title: ctx.title.clone(),
            link: format!(
                "{}/{}{}",
                self.config.site.base_url(),
                ctx.page_name,
                ctx.file_suffix
            ),
            description,
            guid: ctx.page_name.clone(),
            pub_date,
            author: ctx.meta("author").map(str::to_string),
        }))
    }

    /// Assemble the feed from everything stored so far.
    pub fn assemble(&self) -> FeedContainer {
        assemble(&self.store, self.container.clone(), self.max_items)
    }

    /// Serialize the assembled feed without writing it.
    pub fn render(&self) -> Result<String> {
        self.writer.render(&self.assemble())
    }

    /// Write the feed to `<output_dir>/<feed.filename>` and return the path.
    pub fn on_build_finished(&self, output_dir: &Path) -> Result<PathBuf> {
        let feed = self.assemble();
        let path = output_dir.join(&self.config.feed.filename);
        self.writer.write(&feed, &path)?;

        log!(self.writer.name(); "{} ({} of {} items)",
            path.display(), feed.items.len(), self.store.len());
        Ok(path)
    }
}
