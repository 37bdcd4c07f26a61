//! Common utilities for feed generation.

use crate::{content::SitePage, debug, utils::plural_count};

/// A page validated for feed inclusion (requires title and date).
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub title: String,
    pub date: String,
    pub permalink: crate::core::UrlPath,
    pub summary: Option<String>,
}

impl FeedPage {
    fn from_site_page(page: &SitePage) -> Option<Self> {
        if page.title.is_empty() {
            return None;
        }
        Some(Self {
            title: page.title.clone(),
            date: page.date.clone()?,
            permalink: page.permalink.clone(),
            summary: page.summary.clone(),
        })
    }
}

/// Filter pages valid for feed inclusion: only titled, dated pages.
pub fn feed_pages(pages: &[SitePage]) -> Vec<FeedPage> {
    let feed_pages: Vec<FeedPage> = pages.iter().filter_map(FeedPage::from_site_page).collect();

    let excluded = pages.len() - feed_pages.len();
    if excluded > 0 {
        debug!("feed"; "excluded {} without title or date", plural_count(excluded, "page"));
    }

    feed_pages
}
