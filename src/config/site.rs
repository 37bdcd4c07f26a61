//! `[site]` configuration.
//!
//! Basic site metadata: title, tagline, deployment URL, locale set.
//! The first locale is the site's default and becomes the `<html lang>`
//! attribute; a locale switcher is rendered only when more than one locale
//! is configured.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Site metadata for rendering, feeds, and deployment URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title (navbar brand, page titles, feed title).
    pub title: String,

    /// Tagline shown in the hero and in `<title>` of the landing page.
    pub tagline: String,

    /// Meta description for the landing page and feed subtitle.
    pub description: String,

    /// Production URL origin (e.g., "https://weincoder.github.io").
    pub url: Option<String>,

    /// Pathname prefix under which the site is served ("/" or "/project/").
    pub base_url: String,

    /// Organization identifier (GitHub org/user; also the feed author name).
    pub organization: String,

    /// Project identifier (repository name).
    pub project: String,

    /// Contact email, used to normalize RSS authors.
    pub email: String,

    /// Favicon path relative to the static directory.
    pub favicon: String,

    /// Base URL for "edit this page" links, or None to disable them.
    pub edit_url: Option<String>,

    /// Locale codes; the first entry is the default locale.
    pub locales: Vec<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            description: String::new(),
            url: None,
            base_url: "/".into(),
            organization: String::new(),
            project: String::new(),
            email: String::new(),
            favicon: String::new(),
            edit_url: None,
            locales: vec!["es".into()],
        }
    }
}

impl SiteInfoConfig {
    /// The site's default locale (first of the locale set).
    pub fn default_locale(&self) -> &str {
        self.locales.first().map(String::as_str).unwrap_or("es")
    }

    /// Whether a locale switcher should be rendered.
    pub fn has_locale_switcher(&self) -> bool {
        self.locales.len() > 1
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `locales` must not be empty
    /// - `base_url` must start and end with `/`
    /// - `url`, if set, must be a valid http(s) URL with a host
    /// - feeds require `url` to build absolute links
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error("site.title", "must not be empty");
        }

        if self.locales.is_empty() {
            diag.error_with_hint(
                "site.locales",
                "locale set must not be empty",
                "e.g.: locales = [\"es\"]",
            );
        }
        for locale in &self.locales {
            if locale.is_empty() {
                diag.error("site.locales", "locale codes must not be empty");
            }
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                "site.base_url",
                format!("'{}' must start and end with '/'", self.base_url),
                "e.g.: \"/flutter-avanzado/\"",
            );
        }

        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                "site.url",
                "feeds are enabled but site.url is not configured",
                "set site.url, e.g.: \"https://example.github.io\"",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            "site.url",
                            format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error("site.url", "URL must have a valid host");
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        "site.url",
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if feed_enabled && self.email.is_empty() {
            diag.warn("site.email", "empty; RSS authors fall back to the organization name");
        }
    }
}
