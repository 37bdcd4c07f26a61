//! Sidebar tree rendering.

use crate::config::SiteConfig;
use crate::content::DocStore;
use crate::core::UrlPath;
use crate::nav::{NavItem, Sidebar};
use crate::utils::html::{escape, escape_attr};

/// Render the sidebar navigation for a doc page.
///
/// Leaf labels come from each doc's front matter title; the active leaf is
/// highlighted.
pub fn render_sidebar(
    config: &SiteConfig,
    store: &DocStore,
    sidebar: Sidebar,
    active: &UrlPath,
) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<nav class=\"sidebar\">\n");
    render_items(&mut out, config, store, sidebar, active);
    out.push_str("</nav>\n");
    out
}

fn render_items(
    out: &mut String,
    config: &SiteConfig,
    store: &DocStore,
    items: &[NavItem],
    active: &UrlPath,
) {
    out.push_str("<ul class=\"sidebar-items\">\n");
    for item in items {
        match item {
            NavItem::Doc(id) => render_leaf(out, config, store, id, active),
            NavItem::Category { label, items } => {
                out.push_str("<li class=\"sidebar-category\">\n<div class=\"sidebar-category-label\">");
                out.push_str(&escape(label));
                out.push_str("</div>\n");
                render_items(out, config, store, items, active);
                out.push_str("</li>\n");
            }
        }
    }
    out.push_str("</ul>\n");
}

fn render_leaf(out: &mut String, config: &SiteConfig, store: &DocStore, id: &str, active: &UrlPath) {
    // nav validation ran before rendering, so the doc exists; fall back to
    // the id to keep rendering total anyway
    let label = store.doc(id).map(|d| d.meta.title.as_str()).unwrap_or(id);
    let route = format!("/docs/{id}");

    out.push_str("<li class=\"sidebar-item");
    if active.matches_ignoring_trailing_slash(&route) {
        out.push_str(" active");
    }
    out.push_str("\"><a href=\"");
    out.push_str(&escape_attr(&config.paths().url_for(&route)));
    out.push_str("\">");
    out.push_str(&escape(label));
    out.push_str("</a></li>\n");
}
