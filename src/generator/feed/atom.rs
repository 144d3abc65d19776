//! Atom 1.0 feed generation.

use super::FeedWriter;
use crate::feed::{FeedContainer, FeedItem};
use anyhow::{Result, anyhow};
use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder, Person,
    PersonBuilder, Text,
};

/// Used as `updated` when the feed has no items.
const EPOCH: &str = "1970-01-01T00:00:00Z";

#[derive(Default)]
pub struct AtomWriter {
    /// Feed file name, used for the `rel="self"` link.
    self_href: Option<String>,
}

impl AtomWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise the feed's own URL.
    pub fn with_self_link(mut self, href: impl Into<String>) -> Self {
        self.self_href = Some(href.into());
        self
    }
}

impl FeedWriter for AtomWriter {
    fn name(&self) -> &'static str {
        "atom"
    }

    fn render(&self, feed: &FeedContainer) -> Result<String> {
        let updated = feed
            .updated()
            .map(|date| date.to_rfc3339())
            .unwrap_or_else(|| EPOCH.to_string());
        let updated: FixedDateTime = updated
            .parse()
            .map_err(|e| anyhow!("invalid feed timestamp {updated}: {e}"))?;

        let entries = feed
            .items
            .iter()
            .map(item_to_entry)
            .collect::<Result<Vec<Entry>>>()?;

        let mut links = vec![
            LinkBuilder::default()
                .href(feed.link.clone())
                .rel("alternate".to_string())
                .build(),
        ];
        if let Some(href) = &self.self_href {
            links.push(
                LinkBuilder::default()
                    .href(href.clone())
                    .rel("self".to_string())
                    .mime_type(Some("application/atom+xml".to_string()))
                    .build(),
            );
        }

        let authors: Vec<Person> = Some(&feed.author)
            .filter(|a| !a.is_empty())
            .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
            .unwrap_or_default();

        let atom = FeedBuilder::default()
            .title(Text::plain(feed.title.clone()))
            .id(feed.link.clone())
            .updated(updated)
            .authors(authors)
            .links(links)
            .subtitle(Some(Text::plain(feed.description.clone())))
            .rights(feed.copyright.clone().map(Text::plain))
            .lang(feed.language.clone())
            .generator(Some(
                GeneratorBuilder::default()
                    .value("pagefeed")
                    .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                    .build(),
            ))
            .entries(entries)
            .build();

        Ok(atom.to_string())
    }
}

fn item_to_entry(item: &FeedItem) -> Result<Entry> {
    let date = item.pub_date.to_rfc3339();
    let updated: FixedDateTime = date
        .parse()
        .map_err(|e| anyhow!("invalid timestamp {date} for `{}`: {e}", item.guid))?;

    let link: Link = LinkBuilder::default()
        .href(item.link.clone())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = item
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    Ok(EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(item.guid.clone())
        .updated(updated)
        .published(Some(updated))
        .links(vec![link])
        .summary(Some(Text::plain(item.description.clone())))
        .authors(authors)
        .build())
}
