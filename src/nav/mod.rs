//! Sidebar navigation tree.
//!
//! The tree is static data (see [`course`]): an ordered sequence of doc
//! leaves and labeled categories. The build validates it against the doc
//! store and derives the rendered sidebar plus prev/next links from its
//! flattened order.

pub mod course;
mod pager;

pub use course::course_sidebar;
pub use pager::Neighbors;

use rustc_hash::FxHashSet;

use crate::config::ConfigDiagnostics;
use crate::content::DocStore;

/// One node of the sidebar tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    /// Leaf: a doc id (`isolates/introduccion`).
    Doc(&'static str),
    /// Labeled group of nodes.
    Category {
        label: &'static str,
        items: &'static [NavItem],
    },
}

/// An ordered sidebar: the root sequence of nav items
pub type Sidebar = &'static [NavItem];

/// Flatten the tree into its ordered leaf ids.
///
/// This order defines prev/next navigation across the whole course.
pub fn flatten(sidebar: Sidebar) -> Vec<&'static str> {
    let mut leaves = Vec::new();
    collect_leaves(sidebar, &mut leaves);
    leaves
}

fn collect_leaves(items: &'static [NavItem], out: &mut Vec<&'static str>) {
    for item in items {
        match *item {
            NavItem::Doc(id) => out.push(id),
            NavItem::Category { items, .. } => collect_leaves(items, out),
        }
    }
}

/// Validate the sidebar against the loaded docs.
///
/// # Checks
/// - every leaf id maps to an existing doc (missing doc is fatal)
/// - no duplicate leaf ids within the same category
/// - docs not reachable from the sidebar produce a warning
pub fn validate(sidebar: Sidebar, store: &DocStore, diag: &mut ConfigDiagnostics) {
    check_level("sidebar", sidebar, store, diag);

    let reachable: FxHashSet<&str> = flatten(sidebar).into_iter().collect();
    for doc in &store.docs {
        if !reachable.contains(doc.id.as_str()) {
            diag.warn(
                "sidebar",
                format!("doc '{}' is not reachable from the sidebar", doc.id),
            );
        }
    }
}

fn check_level(
    scope: &str,
    items: &'static [NavItem],
    store: &DocStore,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for item in items {
        match *item {
            NavItem::Doc(id) => {
                if !seen.insert(id) {
                    diag.error(scope, format!("duplicate doc '{id}' in the same category"));
                }
                if store.doc(id).is_none() {
                    diag.error(
                        scope,
                        format!("doc '{id}' has no content file (expected content/docs/{id}.md)"),
                    );
                }
            }
            NavItem::Category { label, items: nested } => {
                check_level(label, nested, store, diag);
            }
        }
    }
}
