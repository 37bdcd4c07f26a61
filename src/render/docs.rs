//! Doc and blog page rendering.

use crate::config::SiteConfig;
use crate::content::{Doc, DocStore};
use crate::nav::{Neighbors, Sidebar};
use crate::render::sidebar::render_sidebar;
use crate::render::{Page, render_page};
use crate::utils::html::{escape, escape_attr};

/// Render a full course doc page: sidebar, article, prev/next pager.
pub fn render_doc_page(
    config: &SiteConfig,
    store: &DocStore,
    sidebar: Sidebar,
    leaves: &[&'static str],
    doc: &Doc,
) -> String {
    let mut body = String::with_capacity(doc.html.len() + 4096);

    body.push_str("<div class=\"doc-layout container\">\n");
    body.push_str(&render_sidebar(config, store, sidebar, &doc.permalink));

    body.push_str("<article class=\"doc-content\">\n<h1>");
    body.push_str(&escape(&doc.meta.title));
    body.push_str("</h1>\n");
    body.push_str(&doc.html);

    if let Some(edit_url) = &config.site.edit_url {
        body.push_str("<a class=\"doc-edit\" href=\"");
        body.push_str(&escape_attr(&format!(
            "{}content/docs/{}",
            edit_url,
            doc.source.display()
        )));
        body.push_str("\">Editar esta página</a>\n");
    }

    render_pager(&mut body, config, store, leaves, &doc.id);
    body.push_str("</article>\n</div>\n");

    render_page(
        config,
        &Page {
            title: &doc.meta.title,
            description: doc.meta.description.as_deref(),
            body: &body,
            active: &doc.permalink,
        },
    )
}

/// Prev/next links at the bottom of a doc page.
fn render_pager(
    out: &mut String,
    config: &SiteConfig,
    store: &DocStore,
    leaves: &[&'static str],
    id: &str,
) {
    let neighbors = Neighbors::of(leaves, id);
    if neighbors.prev.is_none() && neighbors.next.is_none() {
        return;
    }

    out.push_str("<nav class=\"doc-pager\">\n");
    render_pager_link(out, config, store, neighbors.prev, "pager-prev", "← Anterior");
    render_pager_link(out, config, store, neighbors.next, "pager-next", "Siguiente →");
    out.push_str("</nav>\n");
}

fn render_pager_link(
    out: &mut String,
    config: &SiteConfig,
    store: &DocStore,
    id: Option<&str>,
    class: &str,
    direction: &str,
) {
    let Some(id) = id else {
        out.push_str("<span></span>\n");
        return;
    };
    let label = store.doc(id).map(|d| d.meta.title.as_str()).unwrap_or(id);

    out.push_str("<a class=\"");
    out.push_str(class);
    out.push_str("\" href=\"");
    out.push_str(&escape_attr(&config.paths().url_for(&format!("/docs/{id}"))));
    out.push_str("\"><span class=\"pager-direction\">");
    out.push_str(direction);
    out.push_str("</span><span class=\"pager-title\">");
    out.push_str(&escape(label));
    out.push_str("</span></a>\n");
}

/// Render the blog index: posts newest first.
pub fn render_blog_index(config: &SiteConfig, store: &DocStore) -> String {
    let mut body = String::with_capacity(4096);
    let permalink = crate::core::UrlPath::from_page("/blog");

    body.push_str("<div class=\"container blog-index\">\n<h1>Blog</h1>\n<ul class=\"post-list\">\n");
    for post in &store.posts {
        body.push_str("<li class=\"post-entry\">");
        if let Some(date) = &post.meta.date {
            body.push_str("<time>");
            body.push_str(&escape(date));
            body.push_str("</time> ");
        }
        body.push_str("<a href=\"");
        body.push_str(&escape_attr(&config.paths().url_for(post.permalink.as_str())));
        body.push_str("\">");
        body.push_str(&escape(&post.meta.title));
        body.push_str("</a>");
        if let Some(description) = &post.meta.description {
            body.push_str("<p class=\"post-summary\">");
            body.push_str(&escape(description));
            body.push_str("</p>");
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n</div>\n");

    render_page(
        config,
        &Page {
            title: "Blog",
            description: None,
            body: &body,
            active: &permalink,
        },
    )
}

/// Render one blog post page.
pub fn render_blog_post(config: &SiteConfig, post: &Doc) -> String {
    let mut body = String::with_capacity(post.html.len() + 1024);

    body.push_str("<div class=\"container blog-post\">\n<article>\n<h1>");
    body.push_str(&escape(&post.meta.title));
    body.push_str("</h1>\n");
    if let Some(date) = &post.meta.date {
        body.push_str("<time class=\"post-date\">");
        body.push_str(&escape(date));
        body.push_str("</time>\n");
    }
    body.push_str(&post.html);
    body.push_str("</article>\n</div>\n");

    render_page(
        config,
        &Page {
            title: &post.meta.title,
            description: post.meta.description.as_deref(),
            body: &body,
            active: &post.permalink,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::ContentKind;
    use crate::nav::{NavItem, course_sidebar, flatten};
    use std::fs;

    const TEST_SIDEBAR: &[NavItem] = &[
        NavItem::Doc("intro"),
        NavItem::Category {
            label: "🧶 Isolates",
            items: &[NavItem::Doc("isolates/introduccion")],
        },
    ];

    fn store_for(ids: &[(&str, &str)]) -> (tempfile::TempDir, DocStore) {
        let tmp = tempfile::tempdir().unwrap();
        for (id, title) in ids {
            let path = tmp.path().join("content/docs").join(format!("{id}.md"));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("+++\ntitle = \"{title}\"\n+++\n\nCuerpo.\n")).unwrap();
        }
        let mut config = test_parse_config("");
        config.build.content = tmp.path().join("content");
        let store = DocStore::scan(&config).unwrap();
        (tmp, store)
    }

    #[test]
    fn test_doc_page_has_sidebar_and_pager() {
        let (_tmp, store) = store_for(&[
            ("intro", "Introducción"),
            ("isolates/introduccion", "Isolates"),
        ]);
        let mut config = test_parse_config("");
        config.site.title = "Flutter Avanzado".into();

        let leaves: Vec<&'static str> = flatten(TEST_SIDEBAR);
        let doc = store.doc("intro").unwrap();
        let html = render_doc_page(&config, &store, TEST_SIDEBAR, &leaves, doc);

        assert!(html.contains("class=\"sidebar\""));
        assert!(html.contains("<h1>Introducción</h1>"));
        // first doc: next only
        assert!(html.contains("Siguiente →"));
        assert!(!html.contains("← Anterior"));
        assert!(html.contains("<title>Introducción | Flutter Avanzado</title>"));
    }

    #[test]
    fn test_doc_page_edit_link() {
        let (_tmp, store) = store_for(&[("intro", "Introducción")]);
        let mut config = test_parse_config("");
        config.site.edit_url = Some("https://github.com/weincoder/flutter-avanzado/tree/main/".into());

        let doc = store.doc("intro").unwrap();
        let html = render_doc_page(&config, &store, TEST_SIDEBAR, &["intro"], doc);
        assert!(html.contains(
            "href=\"https://github.com/weincoder/flutter-avanzado/tree/main/content/docs/intro.md\""
        ));
        assert!(html.contains("Editar esta página"));
    }

    #[test]
    fn test_blog_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = tmp.path().join("content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("2025-03-10-bienvenida.md"),
            "+++\ntitle = \"Bienvenida\"\ndate = \"2025-03-10\"\ndescription = \"Arranca el curso\"\n+++\n\nHola.\n",
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.build.content = tmp.path().join("content");
        let store = DocStore::scan(&config).unwrap();

        let index = render_blog_index(&config, &store);
        assert!(index.contains("<h1>Blog</h1>"));
        assert!(index.contains("href=\"/blog/bienvenida/\""));
        assert!(index.contains("<time>2025-03-10</time>"));
        assert!(index.contains("Arranca el curso"));

        let post = render_blog_post(&config, &store.posts[0]);
        assert!(post.contains("<h1>Bienvenida</h1>"));
        assert!(post.contains("Hola."));
    }

    #[test]
    fn test_course_sidebar_usable_here() {
        // doc pages render against the real course tree as well
        let (_tmp, store) = store_for(
            &flatten(course_sidebar())
                .iter()
                .map(|id| (*id, "T"))
                .collect::<Vec<_>>(),
        );
        let config = test_parse_config("");
        let leaves = flatten(course_sidebar());
        let doc = store.doc("que-sigue/introduccion").unwrap();
        let html = render_doc_page(&config, &store, course_sidebar(), &leaves, doc);
        // last doc: prev only
        assert!(html.contains("← Anterior"));
        assert!(!html.contains("Siguiente →"));
    }
}
