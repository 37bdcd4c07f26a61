//! Shared build/validate plumbing: route table assembly and link checking.

use parking_lot::RwLock;
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Doc, DocStore};
use crate::core::{ResolveResult, RouteTable, UrlPath};
use crate::homepage::home_internal_links;

/// One unresolved internal link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the link was found (file path or chrome location).
    pub source: String,
    /// The link destination as written.
    pub link: String,
}

/// Assemble the route table from everything the build will render.
pub fn build_route_table(store: &DocStore) -> RouteTable {
    let mut routes = RouteTable::new();
    routes.insert(UrlPath::from_page("/"));
    routes.insert(UrlPath::from_page("/blog"));
    for doc in store.iter() {
        routes.insert(doc.permalink.clone());
    }
    routes
}

/// Resolve every internal link in the site against the route table.
///
/// Covers content bodies (docs and posts, in parallel), the landing page
/// chrome (feature cards and hero/CTA buttons), and navbar/footer items.
/// Returns all broken links, sorted by source for stable reports.
pub fn collect_broken_links(
    config: &SiteConfig,
    store: &DocStore,
    routes: &RouteTable,
) -> Vec<BrokenLink> {
    let broken = RwLock::new(Vec::new());

    // content bodies
    let docs: Vec<&Doc> = store.iter().collect();
    docs.par_iter().for_each(|doc| {
        for link in &doc.links {
            if routes.resolve(link, &doc.permalink) == ResolveResult::NotFound {
                broken.write().push(BrokenLink {
                    source: format!("content/{}", doc.source.display()),
                    link: link.clone(),
                });
            }
        }
    });

    let mut broken = broken.into_inner();

    // landing page chrome
    let home = UrlPath::from_page("/");
    for link in home_internal_links() {
        if routes.resolve(link, &home) == ResolveResult::NotFound {
            broken.push(BrokenLink {
                source: "homepage".into(),
                link: link.to_string(),
            });
        }
    }

    // navbar and footer
    for item in &config.navbar.items {
        check_chrome_link(&mut broken, routes, &home, "navbar", item.link.to.as_deref());
    }
    for group in &config.footer.groups {
        for item in &group.items {
            check_chrome_link(&mut broken, routes, &home, "footer", item.to.as_deref());
        }
    }

    broken.sort_by(|a, b| a.source.cmp(&b.source).then(a.link.cmp(&b.link)));
    broken
}

fn check_chrome_link(
    broken: &mut Vec<BrokenLink>,
    routes: &RouteTable,
    home: &UrlPath,
    source: &str,
    to: Option<&str>,
) {
    let Some(to) = to else { return };
    if routes.resolve(to, home) == ResolveResult::NotFound {
        broken.push(BrokenLink {
            source: source.into(),
            link: to.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::nav::{course_sidebar, flatten};
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn full_course(root: &Path) {
        for id in flatten(course_sidebar()) {
            write(
                root,
                &format!("content/docs/{id}.md"),
                "+++\ntitle = \"T\"\n+++\nx\n",
            );
        }
    }

    fn config_for(root: &Path) -> SiteConfig {
        let mut config = test_parse_config("");
        config.build.content = root.join("content");
        config
    }

    #[test]
    fn test_route_table_covers_home_blog_and_docs() {
        let tmp = tempfile::tempdir().unwrap();
        full_course(tmp.path());
        let store = DocStore::scan(&config_for(tmp.path())).unwrap();
        let routes = build_route_table(&store);

        assert!(routes.contains("/"));
        assert!(routes.contains("/blog"));
        assert!(routes.contains("/docs/intro"));
        assert!(routes.contains("/docs/que-sigue/introduccion"));
        assert_eq!(routes.len(), 2 + 17);
    }

    #[test]
    fn test_feature_links_resolve_against_full_course() {
        let tmp = tempfile::tempdir().unwrap();
        full_course(tmp.path());
        let config = config_for(tmp.path());
        let store = DocStore::scan(&config).unwrap();
        let routes = build_route_table(&store);

        let broken = collect_broken_links(&config, &store, &routes);
        assert!(broken.is_empty(), "unexpected broken links: {broken:?}");
    }

    #[test]
    fn test_broken_content_link_detected() {
        let tmp = tempfile::tempdir().unwrap();
        full_course(tmp.path());
        write(
            tmp.path(),
            "content/docs/intro.md",
            "+++\ntitle = \"Intro\"\n+++\nVer [rota](/docs/no-existe).\n",
        );
        let config = config_for(tmp.path());
        let store = DocStore::scan(&config).unwrap();
        let routes = build_route_table(&store);

        let broken = collect_broken_links(&config, &store, &routes);
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].link, "/docs/no-existe");
        assert!(broken[0].source.contains("intro.md"));
    }

    #[test]
    fn test_missing_feature_target_detected() {
        // course without accesibilidad → its feature card link breaks
        let tmp = tempfile::tempdir().unwrap();
        for id in flatten(course_sidebar()) {
            if id == "accesibilidad/introduccion" {
                continue;
            }
            write(
                tmp.path(),
                &format!("content/docs/{id}.md"),
                "+++\ntitle = \"T\"\n+++\nx\n",
            );
        }
        let config = config_for(tmp.path());
        let store = DocStore::scan(&config).unwrap();
        let routes = build_route_table(&store);

        let broken = collect_broken_links(&config, &store, &routes);
        assert!(
            broken
                .iter()
                .any(|b| b.source == "homepage" && b.link == "/docs/accesibilidad/introduccion")
        );
    }

    #[test]
    fn test_navbar_and_footer_links_checked() {
        let tmp = tempfile::tempdir().unwrap();
        full_course(tmp.path());
        let mut config = config_for(tmp.path());
        config.navbar.items = vec![crate::config::NavbarItem {
            link: crate::config::LinkItem {
                label: "Fantasma".into(),
                to: Some("/docs/fantasma".into()),
                href: None,
            },
            position: crate::config::NavPosition::Left,
        }];
        let store = DocStore::scan(&config).unwrap();
        let routes = build_route_table(&store);

        let broken = collect_broken_links(&config, &store, &routes);
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].source, "navbar");
    }

    #[test]
    fn test_external_links_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        full_course(tmp.path());
        write(
            tmp.path(),
            "content/docs/intro.md",
            "+++\ntitle = \"Intro\"\n+++\n[Flutter](https://flutter.dev) y [ancla](#temario).\n",
        );
        let config = config_for(tmp.path());
        let store = DocStore::scan(&config).unwrap();
        let routes = build_route_table(&store);

        assert!(collect_broken_links(&config, &store, &routes).is_empty());
    }
}
