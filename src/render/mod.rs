//! Page shell rendering: head, navbar, footer.
//!
//! Every page goes through [`render_page`]; the shell is the only place
//! that emits `<html>`, the navbar, and the footer, so locale metadata and
//! the copyright year are decided exactly once per render.

pub mod docs;
pub mod sidebar;

use crate::config::{LinkItem, NavPosition, SiteConfig};
use crate::core::UrlPath;
use crate::utils::date::current_year;
use crate::utils::html::{escape, escape_attr};

/// Inputs for one rendered page
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// Page title; joined with the site title in `<title>`.
    pub title: &'a str,
    /// Meta description, if any.
    pub description: Option<&'a str>,
    /// Rendered body markup (everything between navbar and footer).
    pub body: &'a str,
    /// Permalink of this page, for active navbar state.
    pub active: &'a UrlPath,
}

/// Render a full HTML page around the given body.
pub fn render_page(config: &SiteConfig, page: &Page<'_>) -> String {
    let mut out = String::with_capacity(page.body.len() + 4096);

    render_head(&mut out, config, page);
    render_navbar(&mut out, config, page.active);

    out.push_str(page.body);

    render_footer(&mut out, config);
    out.push_str("</body>\n</html>\n");
    out
}

fn render_head(out: &mut String, config: &SiteConfig, page: &Page<'_>) {
    let paths = config.paths();

    out.push_str("<!DOCTYPE html>\n<html lang=\"");
    out.push_str(&escape_attr(config.site.default_locale()));
    out.push_str("\" data-color-mode=\"");
    out.push_str(config.theme.color_mode.html_attr());
    out.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

    out.push_str("<title>");
    if page.title.is_empty() {
        out.push_str(&escape(&config.site.title));
    } else {
        out.push_str(&escape(page.title));
        out.push_str(" | ");
        out.push_str(&escape(&config.site.title));
    }
    out.push_str("</title>\n");

    if let Some(description) = page.description {
        out.push_str("<meta name=\"description\" content=\"");
        out.push_str(&escape_attr(description));
        out.push_str("\">\n");
    }

    if !config.theme.social_card.is_empty() {
        out.push_str("<meta property=\"og:image\" content=\"");
        out.push_str(&escape_attr(&paths.asset_url(&config.theme.social_card)));
        out.push_str("\">\n");
    }

    if !config.site.favicon.is_empty() {
        out.push_str("<link rel=\"icon\" href=\"");
        out.push_str(&escape_attr(&paths.asset_url(&config.site.favicon)));
        out.push_str("\">\n");
    }

    out.push_str("<link rel=\"stylesheet\" href=\"");
    out.push_str(&escape_attr(&paths.asset_url("style.css")));
    out.push_str("\">\n</head>\n<body");

    if !config.theme.highlight.is_empty() {
        out.push_str(" data-highlight=\"");
        out.push_str(&escape_attr(&config.theme.highlight.join(" ")));
        out.push('"');
    }
    out.push_str(">\n");
}

fn render_navbar(out: &mut String, config: &SiteConfig, active: &UrlPath) {
    let paths = config.paths();

    out.push_str("<nav class=\"navbar\">\n<div class=\"navbar-inner\">\n");

    // brand: logo + title, linking home
    out.push_str("<a class=\"navbar-brand\" href=\"");
    out.push_str(&escape_attr(&paths.url_for("/")));
    out.push_str("\">");
    if let Some(logo) = &config.navbar.logo {
        out.push_str("<img class=\"navbar-logo\" src=\"");
        out.push_str(&escape_attr(&paths.asset_url(&logo.src)));
        out.push_str("\" alt=\"");
        out.push_str(&escape_attr(&logo.alt));
        out.push_str("\">");
    }
    let brand = if config.navbar.title.is_empty() {
        &config.site.title
    } else {
        &config.navbar.title
    };
    out.push_str("<span class=\"navbar-title\">");
    out.push_str(&escape(brand));
    out.push_str("</span></a>\n");

    out.push_str("<div class=\"navbar-items\">\n");
    for item in config.navbar.items_at(NavPosition::Left) {
        render_nav_link(out, config, &item.link, active);
    }
    out.push_str("</div>\n<div class=\"navbar-items navbar-items-right\">\n");
    for item in config.navbar.items_at(NavPosition::Right) {
        render_nav_link(out, config, &item.link, active);
    }

    // locale switcher only when there is something to switch to
    if config.site.has_locale_switcher() {
        out.push_str("<div class=\"navbar-locale\">\n");
        for locale in &config.site.locales {
            out.push_str("<a class=\"locale-option\" href=\"");
            out.push_str(&escape_attr(&paths.url_for(&format!("/{locale}"))));
            out.push_str("\">");
            out.push_str(&escape(locale));
            out.push_str("</a>\n");
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n</div>\n</nav>\n");
}

fn render_nav_link(out: &mut String, config: &SiteConfig, link: &LinkItem, active: &UrlPath) {
    out.push_str("<a class=\"navbar-item");

    let href = match (&link.to, &link.href) {
        (Some(to), _) => {
            if active.matches_ignoring_trailing_slash(to) {
                out.push_str(" active");
            }
            config.paths().url_for(to)
        }
        (None, Some(href)) => href.clone(),
        (None, None) => String::new(),
    };

    out.push_str("\" href=\"");
    out.push_str(&escape_attr(&href));
    out.push_str("\">");
    out.push_str(&escape(&link.label));
    out.push_str("</a>\n");
}

fn render_footer(out: &mut String, config: &SiteConfig) {
    let style = match config.footer.style {
        crate::config::FooterStyle::Dark => "footer-dark",
        crate::config::FooterStyle::Light => "footer-light",
    };

    out.push_str("<footer class=\"footer ");
    out.push_str(style);
    out.push_str("\">\n<div class=\"container\">\n<div class=\"footer-groups\">\n");

    for group in &config.footer.groups {
        out.push_str("<div class=\"footer-group\">\n<div class=\"footer-group-title\">");
        out.push_str(&escape(&group.title));
        out.push_str("</div>\n<ul>\n");
        for item in &group.items {
            out.push_str("<li><a href=\"");
            let href = match (&item.to, &item.href) {
                (Some(to), _) => config.paths().url_for(to),
                (None, Some(href)) => href.clone(),
                (None, None) => String::new(),
            };
            out.push_str(&escape_attr(&href));
            out.push_str("\">");
            out.push_str(&escape(&item.label));
            out.push_str("</a></li>\n");
        }
        out.push_str("</ul>\n</div>\n");
    }

    out.push_str("</div>\n<div class=\"footer-copyright\">");
    out.push_str(&escape(&config.footer.copyright_for_year(current_year())));
    out.push_str("</div>\n</div>\n</footer>\n");
}
