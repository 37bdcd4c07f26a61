//! Content documents: front matter and the parsed page model.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::content::markdown::{RenderedMarkdown, render_markdown};
use crate::core::UrlPath;
use crate::utils::date::DateTimeUtc;

/// Front matter fence used in content files
const FENCE: &str = "+++";

/// Parsed TOML front matter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontMatter {
    /// Page title (sidebar label, `<title>`, feed entry title).
    pub title: String,

    /// Short description (meta description, feed summary).
    #[serde(default)]
    pub description: Option<String>,

    /// Publication date, `YYYY-MM-DD` or RFC 3339. Dated pages enter feeds.
    #[serde(default)]
    pub date: Option<String>,

    /// Drafts are skipped unless the build asks for them.
    #[serde(default)]
    pub draft: bool,
}

/// Kind of content document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Course documentation page under `/docs/`.
    Doc,
    /// Blog post under `/blog/`.
    Post,
}

/// A loaded, converted content document
#[derive(Debug, Clone)]
pub struct Doc {
    /// Path-like identifier: `isolates/introduccion` for docs,
    /// the slug for posts.
    pub id: String,
    pub kind: ContentKind,
    /// Source file, relative to the content directory.
    pub source: PathBuf,
    pub meta: FrontMatter,
    /// Site-root permalink (`/docs/<id>/` or `/blog/<slug>/`).
    pub permalink: UrlPath,
    /// Converted HTML body.
    pub html: String,
    /// Outgoing link destinations, for validation.
    pub links: Vec<String>,
}

impl Doc {
    /// Load a document from markdown source.
    ///
    /// `rel_source` is the path relative to the content directory, used for
    /// the id and for error messages.
    pub fn from_source(kind: ContentKind, rel_source: &Path, source: &str) -> Result<Self> {
        let (meta, body) = split_front_matter(source)
            .with_context(|| format!("in {}", rel_source.display()))?;

        if meta.title.is_empty() {
            bail!("{}: front matter `title` must not be empty", rel_source.display());
        }

        if let Some(date) = &meta.date
            && DateTimeUtc::parse(date).is_none()
        {
            bail!(
                "{}: invalid date '{}' (expected YYYY-MM-DD or RFC 3339)",
                rel_source.display(),
                date
            );
        }

        let id = match kind {
            ContentKind::Doc => doc_id(rel_source),
            ContentKind::Post => post_slug(rel_source),
        };
        let permalink = match kind {
            ContentKind::Doc => UrlPath::from_page(&format!("/docs/{id}")),
            ContentKind::Post => UrlPath::from_page(&format!("/blog/{id}")),
        };

        let RenderedMarkdown { html, links, .. } = render_markdown(body);

        Ok(Self {
            id,
            kind,
            source: rel_source.to_path_buf(),
            meta,
            permalink,
            html,
            links,
        })
    }

    /// Parsed publication date, if any.
    pub fn date(&self) -> Option<DateTimeUtc> {
        self.meta.date.as_deref().and_then(DateTimeUtc::parse)
    }
}

/// Split `+++` TOML front matter from the markdown body.
fn split_front_matter(source: &str) -> Result<(FrontMatter, &str)> {
    let Some(rest) = source.strip_prefix(FENCE) else {
        bail!("missing front matter (expected `+++` fence on the first line)");
    };
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let Some(rest) = rest.strip_prefix('\n') else {
        bail!("malformed front matter fence (content after `+++`)");
    };

    let Some(end) = rest.find(&format!("\n{FENCE}")) else {
        bail!("unterminated front matter (missing closing `+++`)");
    };

    let raw = &rest[..end];
    let body = rest[end + 1 + FENCE.len()..].trim_start_matches(['\r', '\n']);

    let meta: FrontMatter =
        toml::from_str(raw).map_err(|e| anyhow::anyhow!("invalid front matter: {e}"))?;
    Ok((meta, body))
}

/// Doc id from its relative source path: `isolates/introduccion.md` ->
/// `isolates/introduccion`. Separators are normalized to `/`.
fn doc_id(rel_source: &Path) -> String {
    let without_ext = rel_source.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Post slug from its filename: `2025-03-10-bienvenida.md` -> `bienvenida`.
/// A file without a date prefix keeps its stem.
fn post_slug(rel_source: &Path) -> String {
    let stem = rel_source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    // strip `YYYY-MM-DD-` prefix when present
    let bytes = stem.as_bytes();
    if bytes.len() > 11
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'-'
        && stem[..10].chars().filter(|c| c.is_ascii_digit()).count() == 8
    {
        stem[11..].to_string()
    } else {
        stem
    }
}
