//! Publish date resolution.
//!
//! Explicit metadata wins. Without it, the date of the last commit touching
//! the page's source file is used. Pages with neither (generated pages,
//! uncommitted files) get no date and stay out of the feed; defaulting them
//! to "now" would push them to the top of every build.

use crate::{
    error::PageError,
    page::PageContext,
    utils::{date::PublishDate, git::HistoryProvider},
};
use std::path::Path;

pub struct DateResolver<'a> {
    /// Metadata key holding an explicit date (e.g. `Publish Date`).
    field: &'a str,
    history: &'a dyn HistoryProvider,
}

impl<'a> DateResolver<'a> {
    pub fn new(field: &'a str, history: &'a dyn HistoryProvider) -> Self {
        Self { field, history }
    }

    /// Resolve the publish date of a page.
    ///
    /// A malformed explicit date is an error rather than a silent fallback to
    /// history: the author asked for a specific date.
    pub fn resolve(&self, page: &PageContext) -> Result<Option<PublishDate>, PageError> {
        self.resolve_parts(page.meta(self.field), page.source.as_deref())
    }

    pub fn resolve_parts(
        &self,
        explicit: Option<&str>,
        source: Option<&Path>,
    ) -> Result<Option<PublishDate>, PageError> {
        if let Some(raw) = explicit {
            return PublishDate::parse(raw)
                .map(Some)
                .map_err(|source| PageError::InvalidDate {
                    field: self.field.to_string(),
                    source,
                });
        }

        Ok(source
            .filter(|path| path.exists())
            .and_then(|path| self.history.lookup_last_modified(path)))
    }
}
