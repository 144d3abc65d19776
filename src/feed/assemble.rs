//! End-of-build feed assembly.

use super::{FeedContainer, FeedItem, ItemStore};

/// Fill `container` with the newest items from `store`.
///
/// `max_items` of `None` keeps everything.
pub fn assemble(store: &ItemStore, mut container: FeedContainer, max_items: Option<usize>) -> FeedContainer {
    container.items = newest_first(store.all(), max_items);
    container
}

/// Stable sort by publish date, newest first, then truncate.
///
/// Items sharing a date keep their incoming order.
pub fn newest_first(mut items: Vec<FeedItem>, max_items: Option<usize>) -> Vec<FeedItem> {
    items.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    if let Some(max) = max_items {
        items.truncate(max);
    }
    items
}
