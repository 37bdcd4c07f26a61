//! Content scanning and the loaded document store.

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::doc::{ContentKind, Doc};
use crate::core::UrlPath;
use crate::debug;

/// A rendered page as seen by the feed and sitemap generators
#[derive(Debug, Clone)]
pub struct SitePage {
    pub permalink: UrlPath,
    pub title: String,
    pub date: Option<String>,
    pub summary: Option<String>,
}

/// All loaded content documents
#[derive(Debug, Default)]
pub struct DocStore {
    /// Course docs, sorted by id.
    pub docs: Vec<Doc>,
    /// Blog posts, newest first (undated last).
    pub posts: Vec<Doc>,
    by_id: FxHashMap<String, usize>,
}

impl DocStore {
    /// Scan and load all content under the configured content directory.
    ///
    /// Docs live in `content/docs/`, posts in `content/blog/`. Drafts are
    /// skipped unless `build.drafts` is set.
    pub fn scan(config: &SiteConfig) -> Result<Self> {
        let content_dir = &config.build.content;

        let mut docs = load_kind(&content_dir.join("docs"), ContentKind::Doc)?;
        let mut posts = load_kind(&content_dir.join("blog"), ContentKind::Post)?;

        if !config.build.drafts {
            let before = posts.len() + docs.len();
            docs.retain(|d| !d.meta.draft);
            posts.retain(|p| !p.meta.draft);
            let skipped = before - posts.len() - docs.len();
            if skipped > 0 {
                debug!("scan"; "skipped {} draft(s)", skipped);
            }
        }

        docs.sort_by(|a, b| a.id.cmp(&b.id));
        // newest first; undated posts sink to the end
        posts.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));

        let by_id = docs
            .iter()
            .enumerate()
            .map(|(idx, doc)| (doc.id.clone(), idx))
            .collect();

        Ok(Self {
            docs,
            posts,
            by_id,
        })
    }

    /// Look up a course doc by its id.
    pub fn doc(&self, id: &str) -> Option<&Doc> {
        self.by_id.get(id).map(|&idx| &self.docs[idx])
    }

    pub fn len(&self) -> usize {
        self.docs.len() + self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty() && self.posts.is_empty()
    }

    /// All content documents (docs then posts).
    pub fn iter(&self) -> impl Iterator<Item = &Doc> {
        self.docs.iter().chain(self.posts.iter())
    }

    /// Page list for the generators: home, blog index, and every document.
    pub fn site_pages(&self) -> Vec<SitePage> {
        let mut pages = Vec::with_capacity(self.len() + 2);
        pages.push(SitePage {
            permalink: UrlPath::from_page("/"),
            title: String::new(),
            date: None,
            summary: None,
        });
        pages.push(SitePage {
            permalink: UrlPath::from_page("/blog"),
            title: String::new(),
            date: None,
            summary: None,
        });
        pages.extend(self.iter().map(|doc| SitePage {
            permalink: doc.permalink.clone(),
            title: doc.meta.title.clone(),
            date: doc.meta.date.clone(),
            summary: doc.meta.description.clone(),
        }));
        pages
    }
}

/// Collect and load every `.md` file under `dir`.
fn load_kind(dir: &Path, kind: ContentKind) -> Result<Vec<Doc>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        })
        .collect();
    files.sort();

    files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let rel = path.strip_prefix(dir).unwrap_or(path);
            Doc::from_source(kind, rel, &source)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(root: &Path) -> crate::config::SiteConfig {
        let mut config = test_parse_config("");
        config.build.content = root.join("content");
        config
    }

    fn doc_source(title: &str) -> String {
        format!("+++\ntitle = \"{title}\"\n+++\n\nContenido.\n")
    }

    #[test]
    fn test_scan_loads_docs_and_posts() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(&content, "docs/intro.md", &doc_source("Introducción"));
        write(
            &content,
            "docs/isolates/introduccion.md",
            &doc_source("Isolates"),
        );
        write(
            &content,
            "blog/2025-03-10-bienvenida.md",
            "+++\ntitle = \"Bienvenida\"\ndate = \"2025-03-10\"\n+++\nHola.\n",
        );

        let store = DocStore::scan(&site(tmp.path())).unwrap();
        assert_eq!(store.docs.len(), 2);
        assert_eq!(store.posts.len(), 1);
        assert!(store.doc("intro").is_some());
        assert!(store.doc("isolates/introduccion").is_some());
        assert!(store.doc("missing").is_none());
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "blog/2025-03-10-antigua.md",
            "+++\ntitle = \"Antigua\"\ndate = \"2025-03-10\"\n+++\nx\n",
        );
        write(
            &content,
            "blog/2025-06-01-reciente.md",
            "+++\ntitle = \"Reciente\"\ndate = \"2025-06-01\"\n+++\nx\n",
        );

        let store = DocStore::scan(&site(tmp.path())).unwrap();
        let titles: Vec<_> = store.posts.iter().map(|p| p.meta.title.as_str()).collect();
        assert_eq!(titles, ["Reciente", "Antigua"]);
    }

    #[test]
    fn test_drafts_skipped_by_default() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(
            &content,
            "blog/2025-01-01-borrador.md",
            "+++\ntitle = \"Borrador\"\ndate = \"2025-01-01\"\ndraft = true\n+++\nx\n",
        );

        let mut config = site(tmp.path());
        let store = DocStore::scan(&config).unwrap();
        assert!(store.posts.is_empty());

        config.build.drafts = true;
        let store = DocStore::scan(&config).unwrap();
        assert_eq!(store.posts.len(), 1);
    }

    #[test]
    fn test_bad_front_matter_fails_scan() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(&content, "docs/roto.md", "# Sin front matter\n");

        assert!(DocStore::scan(&site(tmp.path())).is_err());
    }

    #[test]
    fn test_site_pages_include_home_and_blog_index() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write(&content, "docs/intro.md", &doc_source("Introducción"));

        let store = DocStore::scan(&site(tmp.path())).unwrap();
        let pages = store.site_pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].permalink.as_str(), "/");
        assert_eq!(pages[1].permalink.as_str(), "/blog/");
        assert_eq!(pages[2].permalink.as_str(), "/docs/intro/");
    }

    #[test]
    fn test_missing_content_dirs_are_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DocStore::scan(&site(tmp.path())).unwrap();
        assert!(store.is_empty());
    }
}
