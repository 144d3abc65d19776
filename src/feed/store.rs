//! Build-scoped item storage.

use super::FeedItem;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Feed items keyed by page name.
///
/// Page hooks may run on several threads; writers take the lock one at a
/// time. Re-processing a page replaces its earlier item.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<BTreeMap<String, FeedItem>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the item for `page_name`.
    pub fn put(&self, page_name: impl Into<String>, item: FeedItem) {
        self.items.write().insert(page_name.into(), item);
    }

    /// All items, ordered by page name.
    pub fn all(&self) -> Vec<FeedItem> {
        self.items.read().values().cloned().collect()
    }

    pub fn get(&self, page_name: &str) -> Option<FeedItem> {
        self.items.read().get(page_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}
