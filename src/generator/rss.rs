//! RSS feed generation.
//!
//! Builds one channel from the list-eligible documents, in the same
//! date-descending order as the home page. Unlisted and unpublished
//! documents never reach the feed.

use crate::{config::SiteConfig, content::ContentIndex, log};
use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, TimeZone, Utc};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};
use std::fs;

/// Generate and write the feed when enabled in the config.
pub fn build_rss(config: &'static SiteConfig, index: &ContentIndex) -> Result<()> {
    if !config.build.rss.enable {
        return Ok(());
    }

    let channel = build_channel(config, index)?;
    channel
        .validate()
        .map_err(|e| anyhow!("rss validate: {e}"))?;

    let rss_path = &config.build.rss.path;
    if let Some(parent) = rss_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(rss_path, channel.to_string())
        .with_context(|| format!("Failed to write feed: {}", rss_path.display()))?;

    log!("rss"; "feed written to {}", rss_path.display());
    Ok(())
}

fn build_channel(config: &SiteConfig, index: &ContentIndex) -> Result<Channel> {
    // validate() has already required a url when rss is enabled
    let base_url = config
        .base
        .url
        .as_deref()
        .context("rss requires base.url")?
        .trim_end_matches('/')
        .to_owned();

    let author = format!("{} ({})", config.base.email, config.base.author);

    let items: Vec<Item> = index
        .documents(None)
        .iter()
        .map(|doc| {
            let link = format!("{base_url}/posts/{}/", doc.id);
            ItemBuilder::default()
                .title(doc.title.clone())
                .link(link.clone())
                .guid(GuidBuilder::default().permalink(true).value(link).build())
                .description(doc.description.clone())
                .pub_date(to_rfc2822(doc.date))
                .author(author.clone())
                .build()
        })
        .collect();

    Ok(ChannelBuilder::default()
        .title(config.base.title.clone())
        .link(base_url)
        .description(config.base.description.clone())
        .language(config.base.language.clone())
        .generator("quill".to_string())
        .items(items)
        .build())
}

/// Format a date as RFC 2822 at midnight UTC, as feed readers expect.
fn to_rfc2822(date: NaiveDate) -> String {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&midnight).to_rfc2822()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Document;
    use std::path::PathBuf;

    fn doc(id: &str, date: &str, listed: bool) -> Document {
        Document {
            id: id.to_owned(),
            title: format!("Post {id}"),
            published: true,
            listed,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            updated: None,
            tags: vec![],
            description: Some(format!("Summary of {id}.")),
            body: String::new(),
            source: PathBuf::from(format!("{id}.md")),
        }
    }

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Fieldnotes".into();
        config.base.description = "notes".into();
        config.base.url = Some("https://example.org/".into());
        config
    }

    #[test]
    fn test_to_rfc2822() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(to_rfc2822(date), "Mon, 15 Jan 2024 00:00:00 +0000");
    }

    #[test]
    fn test_channel_items_listed_only_newest_first() {
        let index = ContentIndex::from_documents(vec![
            doc("old", "2022-01-01", true),
            doc("new", "2023-01-01", true),
            doc("hidden", "2024-01-01", false),
        ])
        .unwrap();

        let channel = build_channel(&config(), &index).unwrap();
        let links: Vec<_> = channel.items().iter().filter_map(|i| i.link()).collect();
        assert_eq!(
            links,
            vec![
                "https://example.org/posts/new/",
                "https://example.org/posts/old/"
            ]
        );
    }

    #[test]
    fn test_channel_validates() {
        let index = ContentIndex::from_documents(vec![doc("a", "2022-01-01", true)]).unwrap();
        let channel = build_channel(&config(), &index).unwrap();
        channel.validate().unwrap();

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("Post a"));
        assert!(item.guid().is_some_and(|g| g.is_permalink()));
        assert_eq!(item.description(), Some("Summary of a."));
    }

    #[test]
    fn test_channel_requires_base_url() {
        let index = ContentIndex::default();
        let mut config = config();
        config.base.url = None;
        assert!(build_channel(&config, &index).is_err());
    }
}
