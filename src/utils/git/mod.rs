//! Version-control history lookups.
//!
//! Pages without an explicit publish date fall back to the date of the last
//! commit that touched their source file. The lookup sits behind
//! [`HistoryProvider`] so the resolver never spawns processes in tests.

mod log;

pub use log::GitHistory;

use crate::utils::date::PublishDate;
use std::path::Path;

/// Source of "last modified" dates for page source files.
pub trait HistoryProvider: Send + Sync {
    /// Date of the most recent change to `path`, or `None` when the file has
    /// no history or the lookup failed.
    fn lookup_last_modified(&self, path: &Path) -> Option<PublishDate>;
}

/// Provider used when no version control is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHistory;

impl HistoryProvider for NoHistory {
    fn lookup_last_modified(&self, _path: &Path) -> Option<PublishDate> {
        None
    }
}

/// Pick `git` when it is on `PATH`, otherwise [`NoHistory`].
pub fn detect_history() -> Box<dyn HistoryProvider> {
    match GitHistory::detect() {
        Some(git) => Box::new(git),
        None => {
            crate::log!("git"; "git not found, pages without a publish date are skipped");
            Box::new(NoHistory)
        }
    }
}
