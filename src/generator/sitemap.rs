//! Sitemap generation.
//!
//! Writes a sitemap.xml listing every rendered page for search engine
//! indexing. Dated pages carry `<lastmod>`.

use crate::{config::SiteConfig, content::SitePage, log};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap.xml if enabled.
pub fn build_sitemap(config: &SiteConfig, pages: &[SitePage]) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }

    let xml = sitemap_xml(config, pages);
    let path = config.paths().output_dir().join(&config.build.sitemap.path);

    fs::write(&path, xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn sitemap_xml(config: &SiteConfig, pages: &[SitePage]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for page in pages {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&config.absolute_url(&page.permalink)));
        xml.push_str("</loc>\n");
        if let Some(date) = &page.date {
            xml.push_str("    <lastmod>");
            xml.push_str(&escape_xml(date));
            xml.push_str("</lastmod>\n");
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
