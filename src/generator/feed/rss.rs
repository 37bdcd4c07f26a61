//! RSS 2.0 feed generation.

use super::common::FeedPage;
use crate::{config::SiteConfig, log, utils::date::DateTimeUtc};
use anyhow::{Result, anyhow};
use regex::Regex;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

/// Build RSS 2.0 feed
pub fn build_rss(config: &SiteConfig, pages: &[FeedPage]) -> Result<()> {
    let xml = rss_xml(config, pages)?;
    let path = config.paths().output_dir().join(&config.build.feed.rss_path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, xml)?;

    log!("rss"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn rss_xml(config: &SiteConfig, pages: &[FeedPage]) -> Result<String> {
    let items: Vec<_> = pages
        .iter()
        .filter_map(|page| page_to_rss_item(page, config))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.site.title)
        .link(config.site.url.as_deref().unwrap_or_default())
        .description(&config.site.description)
        .language(Some(config.site.default_locale().to_string()))
        .generator(Some("aula".to_string()))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn page_to_rss_item(page: &FeedPage, config: &SiteConfig) -> Option<rss::Item> {
    let pub_date = DateTimeUtc::parse(&page.date).map(DateTimeUtc::to_rfc2822)?;
    let link = config.absolute_url(&page.permalink);

    Some(
        ItemBuilder::default()
            .title(Some(page.title.clone()))
            .link(Some(link.clone()))
            .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
            .description(page.summary.clone())
            .pub_date(Some(pub_date))
            .author(Some(rss_author(config)))
            .build(),
    )
}

/// Normalize the site contact to RSS author format: "email (Name)".
fn rss_author(config: &SiteConfig) -> String {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let combined = format!("{} ({})", config.site.email, config.site.organization);
    if RE_VALID_AUTHOR.is_match(&combined) {
        combined
    } else {
        // no usable email; RSS tolerates a bare name
        config.site.organization.clone()
    }
}
