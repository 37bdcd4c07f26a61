//! Blog feed generation (RSS 2.0 + Atom 1.0).
//!
//! Mirrors the site's blog feed contract: both formats are produced when
//! feeds are enabled, over dated pages only.

mod atom;
mod common;
mod rss;

pub use common::{FeedPage, feed_pages};

use crate::{config::SiteConfig, content::SitePage};
use anyhow::Result;

/// Build RSS and Atom feeds if enabled.
pub fn build_feed(config: &SiteConfig, pages: &[SitePage]) -> Result<()> {
    if !config.build.feed.enable {
        return Ok(());
    }

    let feed_pages = feed_pages(pages);
    self::rss::build_rss(config, &feed_pages)?;
    self::atom::build_atom(config, &feed_pages)
}
