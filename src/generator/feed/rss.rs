//! RSS 2.0 feed generation.

use super::FeedWriter;
use crate::feed::{FeedContainer, FeedItem};
use anyhow::Result;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

pub struct RssWriter {
    generator: String,
}

impl RssWriter {
    pub fn new() -> Self {
        Self {
            generator: concat!("pagefeed ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for RssWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedWriter for RssWriter {
    fn name(&self) -> &'static str {
        "rss"
    }

    fn render(&self, feed: &FeedContainer) -> Result<String> {
        let items: Vec<_> = feed.items.iter().map(item_to_rss).collect();

        let channel = ChannelBuilder::default()
            .title(&feed.title)
            .link(&feed.link)
            .description(&feed.description)
            .language(feed.language.clone())
            .copyright(feed.copyright.clone())
            .managing_editor(Some(feed.author.clone()).filter(|a| !a.is_empty()))
            .generator(self.generator.clone())
            .items(items)
            .build();

        Ok(channel.to_string())
    }
}

fn item_to_rss(item: &FeedItem) -> rss::Item {
    // The guid is the page name, not a URL.
    let guid = GuidBuilder::default()
        .permalink(false)
        .value(item.guid.clone())
        .build();

    ItemBuilder::default()
        .title(item.title.clone())
        .link(item.link.clone())
        .description(item.description.clone())
        .guid(guid)
        .pub_date(item.pub_date.to_rfc2822())
        .author(item.author.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::PublishDate;

    fn feed() -> FeedContainer {
        FeedContainer {
            title: "Docs".into(),
            link: "https://example.com".into(),
            author: "Docs Team".into(),
            description: "Project news".into(),
            language: Some("en".into()),
            copyright: None,
            items: vec![
                FeedItem {
                    title: "Newer".into(),
                    link: "https://example.com/newer.html".into(),
                    description: "Second & last...".into(),
                    guid: "newer".into(),
                    pub_date: PublishDate::from_ymd(2021, 6, 15),
                    author: Some("Jo".into()),
                },
                FeedItem {
                    title: "Older".into(),
                    link: "https://example.com/older.html".into(),
                    description: "First...".into(),
                    guid: "older".into(),
                    pub_date: PublishDate::new(2020, 1, 1, 9, 30),
                    author: None,
                },
            ],
        }
    }

    #[test]
    fn test_item_to_rss() {
        let item = item_to_rss(&feed().items[0]);
        assert_eq!(item.title(), Some("Newer"));
        assert_eq!(item.link(), Some("https://example.com/newer.html"));
        assert_eq!(item.pub_date(), Some("Tue, 15 Jun 2021 00:00:00 GMT"));
        assert_eq!(item.author(), Some("Jo"));
        let guid = item.guid().unwrap();
        assert_eq!(guid.value(), "newer");
        assert!(!guid.is_permalink());
    }

    #[test]
    fn test_render_channel() {
        let xml = RssWriter::new().render(&feed()).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();

        assert_eq!(channel.title(), "Docs");
        assert_eq!(channel.link(), "https://example.com");
        assert_eq!(channel.language(), Some("en"));
        assert_eq!(channel.copyright(), None);
        assert_eq!(channel.managing_editor(), Some("Docs Team"));

        let titles: Vec<_> = channel.items().iter().filter_map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        assert_eq!(channel.items()[0].description(), Some("Second & last..."));
    }

    #[test]
    fn test_render_empty_feed() {
        let mut feed = feed();
        feed.items.clear();
        let xml = RssWriter::new().render(&feed).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert!(channel.items().is_empty());
    }
}
