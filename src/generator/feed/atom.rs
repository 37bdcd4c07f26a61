//! Atom 1.0 feed generation.

use super::common::FeedPage;
use crate::{config::SiteConfig, log, utils::date::DateTimeUtc};
use anyhow::Result;
use atom_syndication::{
    Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder,
    Person, PersonBuilder, Text,
};
use std::fs;

/// Build Atom 1.0 feed.
pub fn build_atom(config: &SiteConfig, pages: &[FeedPage]) -> Result<()> {
    let xml = atom_xml(config, pages);
    let path = config.paths().output_dir().join(&config.build.feed.atom_path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, xml)?;

    log!("atom"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn atom_xml(config: &SiteConfig, pages: &[FeedPage]) -> String {
    let base_url = config.site.url.as_deref().unwrap_or_default().trim_end_matches('/');

    let entries: Vec<Entry> = pages
        .iter()
        .filter_map(|page| page_to_atom_entry(page, config))
        .collect();

    // Most recent entry time becomes the feed updated field. RFC 3339
    // strings sort lexicographically, so max() works on the strings.
    let updated_str = pages
        .iter()
        .filter_map(|p| DateTimeUtc::parse(&p.date).map(DateTimeUtc::to_rfc3339))
        .max()
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string());
    let updated: FixedDateTime = updated_str.parse().unwrap_or_default();

    let author: Person = PersonBuilder::default()
        .name(config.site.organization.clone())
        .email(Some(config.site.email.clone()).filter(|e| !e.is_empty()))
        .build();

    let self_link: Link = LinkBuilder::default()
        .href(format!(
            "{}{}",
            base_url,
            config.paths().asset_url(&config.build.feed.atom_path.to_string_lossy())
        ))
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(format!("{}{}", base_url, config.site.base_url))
        .rel("alternate".to_string())
        .build();

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(config.site.title.clone()))
        .id(format!("{}{}", base_url, config.site.base_url))
        .updated(updated)
        .authors(vec![author])
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(config.site.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value("aula")
                .uri(Some("https://github.com/weincoder/flutter-avanzado".to_string()))
                .build(),
        ))
        .lang(Some(config.site.default_locale().to_string()))
        .entries(entries)
        .build();

    feed.to_string()
}

fn page_to_atom_entry(page: &FeedPage, config: &SiteConfig) -> Option<Entry> {
    let updated_str = DateTimeUtc::parse(&page.date)?.to_rfc3339();
    let updated: FixedDateTime = updated_str.parse().ok()?;

    let link = config.absolute_url(&page.permalink);

    let entry_link: Link = LinkBuilder::default()
        .href(&link)
        .rel("alternate".to_string())
        .build();

    Some(
        EntryBuilder::default()
            .title(Text::plain(page.title.clone()))
            .id(&link)
            .updated(updated)
            .links(vec![entry_link])
            .summary(page.summary.clone().map(Text::plain))
            .build(),
    )
}
