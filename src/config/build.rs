//! `[build]` configuration: paths and generated artifacts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory (docs and blog sources).
    pub content: PathBuf,

    /// Output directory for the generated site.
    pub output: PathBuf,

    /// Static assets directory, copied verbatim into the output root.
    pub static_dir: PathBuf,

    /// Feed generation settings.
    pub feed: FeedConfig,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,

    /// URL prefix derived from `site.base_url`; cleared in serve mode.
    /// (internal use only)
    #[serde(skip)]
    pub path_prefix: PathBuf,

    /// Clean output directory before building (CLI flag).
    #[serde(skip)]
    pub clean: bool,

    /// Include draft posts (CLI flag).
    #[serde(skip)]
    pub drafts: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            output: PathBuf::from("public"),
            static_dir: PathBuf::from("static"),
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
            path_prefix: PathBuf::new(),
            clean: false,
            drafts: false,
        }
    }
}

/// RSS/Atom feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Generate feeds for the blog section.
    pub enable: bool,

    /// RSS 2.0 output filename, relative to the output directory.
    pub rss_path: PathBuf,

    /// Atom 1.0 output filename, relative to the output directory.
    pub atom_path: PathBuf,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            rss_path: PathBuf::from("feed.xml"),
            atom_path: PathBuf::from("atom.xml"),
        }
    }
}

/// Sitemap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    pub enable: bool,

    /// Output filename, relative to the output directory.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: PathBuf::from("sitemap.xml"),
        }
    }
}
