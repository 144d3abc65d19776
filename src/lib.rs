//! Pagefeed - RSS and Atom feeds for documentation builds.
//!
//! A host build hands every rendered page to [`feed::FeedPipeline::on_page`]
//! and calls [`feed::FeedPipeline::on_build_finished`] once at the end. The
//! pipeline filters pages, resolves publish dates (metadata first, git
//! history second), extracts a short description and writes the feed.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod generator;
pub mod logger;
pub mod page;
pub mod utils;
