//! Route table and internal link resolution.
//!
//! The build registers every page permalink here, then every internal link
//! in the site (feature cards, navbar, footer, sidebar, markdown bodies) is
//! resolved against the table. A link that resolves to nothing is an
//! authoring error and fails the build.

use rustc_hash::FxHashSet;

use super::link::LinkKind;
use super::url::UrlPath;

/// Result of resolving one link against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    /// Link resolves to a registered page.
    Found(UrlPath),
    /// External link, not ours to validate.
    External,
    /// Page-local anchor; fragment targets are not tracked.
    Fragment,
    /// No registered page matches.
    NotFound,
}

/// Set of all page permalinks known to the site
#[derive(Debug, Default)]
pub struct RouteTable {
    pages: FxHashSet<UrlPath>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page permalink.
    pub fn insert(&mut self, permalink: UrlPath) {
        self.pages.insert(permalink);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check whether an exact (slash-normalized) permalink is registered.
    pub fn contains(&self, link: &str) -> bool {
        self.pages.contains(&UrlPath::from_page(link))
    }

    /// Resolve a link found in content or site chrome.
    ///
    /// `current` is the permalink of the page the link appears on; relative
    /// links resolve against it.
    pub fn resolve(&self, dest: &str, current: &UrlPath) -> ResolveResult {
        match LinkKind::parse(dest) {
            LinkKind::External(_) => ResolveResult::External,
            LinkKind::Fragment(_) => ResolveResult::Fragment,
            LinkKind::SiteRoot(path) => self.lookup(path),
            LinkKind::FileRelative(path) => {
                let joined = join_relative(current.as_str(), path);
                self.lookup(&joined)
            }
        }
    }

    fn lookup(&self, path: &str) -> ResolveResult {
        let normalized = UrlPath::from_page(path);
        if self.pages.contains(&normalized) {
            ResolveResult::Found(normalized)
        } else {
            ResolveResult::NotFound
        }
    }

    /// Iterate registered permalinks (order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = &UrlPath> {
        self.pages.iter()
    }
}

/// Join a relative link against the directory of the current permalink.
///
/// `/docs/isolates/introduccion/` + `./basico` -> `/docs/isolates/basico`
/// `/docs/isolates/introduccion/` + `../intro` -> `/docs/intro`
fn join_relative(current: &str, rel: &str) -> String {
    // Permalinks end with '/'; the final segment is the page itself, so
    // links are relative to its parent directory.
    let mut segments: Vec<&str> = current
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    segments.pop();

    for part in rel.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            seg => segments.push(seg),
        }
    }

    format!("/{}", segments.join("/"))
}
