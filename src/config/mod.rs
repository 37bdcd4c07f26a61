//! Site configuration management for `aula.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[site]`     | Metadata (title, tagline, url, locales, ...)     |
//! | `[theme]`    | Color mode and syntax highlighting               |
//! | `[navbar]`   | Brand, logo, and navbar items                    |
//! | `[footer]`   | Link groups and the copyright template           |
//! | `[build]`    | Paths, feed, and sitemap settings                |
//! | `[serve]`    | Preview server (interface, port)                 |
//! | `[validate]` | Link validation level                            |

mod build;
mod error;
mod handle;
mod links;
mod serve;
mod site;
mod theme;
mod validate;

pub use build::{BuildSectionConfig, FeedConfig, SitemapConfig};
pub use error::{ConfigDiagnostics, ConfigError};
pub use handle::{cfg, init_config};
pub use links::{
    FooterConfig, FooterGroup, FooterStyle, LinkItem, LogoConfig, NavPosition, NavbarConfig,
    NavbarItem,
};
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
pub use theme::{ColorModeConfig, ColorScheme, ThemeConfig};
pub use validate::{LinkCheckConfig, ValidateConfig, ValidateLevel};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    core::UrlPath,
    log,
    utils::path::{find_config_file, normalize_path},
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing aula.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Navbar definition
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Footer definition
    #[serde(default)]
    pub footer: FooterConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root is
    /// the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => {
                log!(
                    "error";
                    "Config file '{}' not found in this directory or any parent.",
                    cli.config.display()
                );
                std::process::exit(1);
            }
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = normalize_path(&config_path);
        config.cli = Some(cli);
        config.finalize(cli);
        config.validate_all()?;

        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Finalize configuration after loading: resolve the project root,
    /// normalize paths, apply CLI overrides, derive the URL prefix.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.root = normalize_path(&root);

        // CLI path overrides, then normalize everything against root
        if let Some(content) = &cli.content {
            self.build.content = content.clone();
        }
        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }
        self.build.content = normalize_path(&self.root.join(&self.build.content));
        self.build.output = normalize_path(&self.root.join(&self.build.output));
        self.build.static_dir = normalize_path(&self.root.join(&self.build.static_dir));

        self.apply_command_options(cli);
        self.sync_path_prefix();

        // Local preview serves at / unless the prefix is explicitly kept
        if matches!(cli.command, Commands::Serve { .. }) && !self.serve.respect_prefix {
            self.build.path_prefix = PathBuf::new();
        }
    }

    /// Derive `build.path_prefix` from `site.base_url`.
    ///
    /// "/flutter-avanzado/" becomes the prefix under which every page URL
    /// and output file lives, matching GitHub Pages project-site layout.
    fn sync_path_prefix(&mut self) {
        let prefix = self.site.base_url.trim_matches('/');
        self.build.path_prefix = if prefix.is_empty() {
            PathBuf::new()
        } else {
            PathBuf::from(prefix)
        };
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                if let Some(interface) = interface {
                    self.serve.interface = *interface;
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
                // Local URL for absolute-link generation during preview
                if self.site.url.is_none() {
                    self.site.url =
                        Some(format!("http://{}:{}", self.serve.interface, self.serve.port));
                }
            }
            Commands::Validate { args } => {
                if let Some(links) = args.links {
                    self.validate.links.enable = links;
                }
                if args.warn_only {
                    self.validate.links.level = ValidateLevel::Warn;
                }
            }
            Commands::Query { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        self.build.clean = args.clean;
        self.build.drafts = args.drafts;

        if let Some(rss) = args.rss {
            self.build.feed.enable = rss;
        }
        if let Some(sitemap) = args.sitemap {
            self.build.sitemap.enable = sitemap;
        }
        if let Some(url) = &args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Validate configuration, collecting all errors at once.
    pub fn validate_all(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.build.feed.enable, &mut diag);
        self.theme.validate(&mut diag);
        self.navbar.validate(&mut diag);
        self.footer.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Get path resolver for consistent path/URL generation.
    ///
    /// Single source of truth for `path_prefix` handling: output locations
    /// and emitted URLs both go through it.
    pub fn paths(&self) -> PathResolver<'_> {
        PathResolver {
            output: &self.build.output,
            prefix: &self.build.path_prefix,
        }
    }

    /// Absolute site URL (origin + base_url), for feeds and sitemap.
    pub fn absolute_url(&self, permalink: &UrlPath) -> String {
        let origin = self.site.url.as_deref().unwrap_or_default();
        format!(
            "{}{}",
            origin.trim_end_matches('/'),
            self.paths().url_for(permalink.as_str())
        )
    }
}

/// Path and URL generation honoring the configured prefix
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    output: &'a Path,
    prefix: &'a Path,
}

impl PathResolver<'_> {
    /// Output directory including the URL prefix.
    pub fn output_dir(&self) -> PathBuf {
        self.output.join(self.prefix)
    }

    /// Emit a page URL for markup: prefix + normalized page path.
    ///
    /// `url_for("/docs/intro")` -> `/flutter-avanzado/docs/intro/`
    pub fn url_for(&self, page: &str) -> String {
        let page = UrlPath::from_page(page);
        match self.prefix.to_str().filter(|p| !p.is_empty()) {
            Some(prefix) => format!("/{}{}", prefix, page.to_encoded()),
            None => page.to_encoded(),
        }
    }

    /// Emit an asset URL (no trailing slash): prefix + file path.
    ///
    /// `asset_url("style.css")` -> `/flutter-avanzado/style.css`
    pub fn asset_url(&self, file: &str) -> String {
        let file = file.trim_start_matches('/');
        match self.prefix.to_str().filter(|p| !p.is_empty()) {
            Some(prefix) => format!("/{}/{}", prefix, file),
            None => format!("/{}", file),
        }
    }

    /// Output file for a page permalink: `<output>/<prefix><permalink>/index.html`.
    pub fn output_file(&self, permalink: &UrlPath) -> PathBuf {
        let rel = permalink.as_str().trim_matches('/');
        let mut path = self.output_dir();
        if !rel.is_empty() {
            path.push(rel);
        }
        path.join("index.html")
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config from TOML, panicking on unknown fields (catches typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    // mimic finalize() for the pieces tests rely on
    let prefix = parsed.site.base_url.trim_matches('/').to_string();
    parsed.build.path_prefix = if prefix.is_empty() {
        PathBuf::new()
    } else {
        PathBuf::from(prefix)
    };
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"X\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(config.build.feed.enable);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[mystery]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("mystery")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ntagline = \"Aprende\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_path_prefix_from_base_url() {
        let config = test_parse_config("base_url = \"/flutter-avanzado/\"");
        assert_eq!(config.build.path_prefix, PathBuf::from("flutter-avanzado"));
        assert_eq!(
            config.paths().url_for("/docs/intro"),
            "/flutter-avanzado/docs/intro/"
        );
        assert_eq!(
            config.paths().asset_url("style.css"),
            "/flutter-avanzado/style.css"
        );
    }

    #[test]
    fn test_root_base_url_has_no_prefix() {
        let config = test_parse_config("");
        assert_eq!(config.paths().url_for("/docs/intro"), "/docs/intro/");
        assert_eq!(config.paths().asset_url("style.css"), "/style.css");
    }

    #[test]
    fn test_output_file_layout() {
        let mut config = test_parse_config("base_url = \"/flutter-avanzado/\"");
        config.build.output = PathBuf::from("/tmp/site/public");
        let paths = config.paths();

        assert_eq!(
            paths.output_file(&UrlPath::from_page("/")),
            PathBuf::from("/tmp/site/public/flutter-avanzado/index.html")
        );
        assert_eq!(
            paths.output_file(&UrlPath::from_page("/docs/intro")),
            PathBuf::from("/tmp/site/public/flutter-avanzado/docs/intro/index.html")
        );
    }

    #[test]
    fn test_absolute_url() {
        let mut config = test_parse_config("base_url = \"/flutter-avanzado/\"");
        config.site.url = Some("https://weincoder.github.io".into());
        assert_eq!(
            config.absolute_url(&UrlPath::from_page("/docs/intro")),
            "https://weincoder.github.io/flutter-avanzado/docs/intro/"
        );
    }
}
