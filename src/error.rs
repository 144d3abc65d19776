//! Page-local errors.
//!
//! None of these fail a build: the pipeline logs them and leaves the page
//! out of the feed.

use crate::utils::date::DateError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("invalid `{field}` metadata: {source}")]
    InvalidDate {
        field: String,
        #[source]
        source: DateError,
    },

    #[error("body has no `</h1>` to strip the title from")]
    MissingHeading,
}
