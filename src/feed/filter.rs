//! Page eligibility.

use regex::Regex;

/// Decides whether a page is left out of the feed.
///
/// The pattern only has to match at the start of the page name; it need
/// not cover the whole name. No pattern means nothing is skipped.
#[derive(Debug, Clone, Default)]
pub struct SkipFilter {
    pattern: Option<Regex>,
}

impl SkipFilter {
    /// `pattern` must already be anchored at the start (see
    /// [`FeedSectionConfig::skip_pattern`](crate::config::FeedSectionConfig::skip_pattern)).
    pub fn new(pattern: Option<Regex>) -> Self {
        Self { pattern }
    }

    pub fn is_excluded(&self, page_name: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|re| re.find(page_name).is_some_and(|m| m.start() == 0))
    }
}
