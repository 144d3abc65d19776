//! Configuration section definitions.
//!
//! | Module | TOML Section | Purpose                                 |
//! |--------|--------------|-----------------------------------------|
//! | `site` | `[site]`     | Channel metadata and base URL           |
//! | `feed` | `[feed]`     | Output, item limit, skip pattern, dates |

mod feed;
mod site;

pub use feed::{FeedFormat, FeedSectionConfig};
pub use site::SiteInfoConfig;
