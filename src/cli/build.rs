//! Site build pipeline.
//!
//! Order matters: scan → validate (navigation, then links) → write. Nothing
//! is written until validation passes, so a broken link never reaches the
//! output directory.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;
use std::time::Instant;

use crate::cli::common::{build_route_table, collect_broken_links};
use crate::config::{ConfigDiagnostics, SiteConfig, ValidateLevel};
use crate::content::{DocStore, SitePage};
use crate::core::UrlPath;
use crate::homepage::{HOME_DESCRIPTION, HOME_TITLE, render_home};
use crate::nav::{course_sidebar, flatten, validate as validate_nav};
use crate::render::docs::{render_blog_index, render_blog_post, render_doc_page};
use crate::render::{Page, render_page};
use crate::utils::plural_count;
use crate::{embed, log};

/// A completed build: the page list feeds the generators.
#[derive(Debug)]
pub struct BuiltSite {
    pub pages: Vec<SitePage>,
}

/// Build the whole site into the output directory.
pub fn build_site(config: &SiteConfig) -> Result<BuiltSite> {
    let start = Instant::now();

    let store = DocStore::scan(config)?;
    log!(
        "scan";
        "loaded {} and {}",
        plural_count(store.docs.len(), "doc"),
        plural_count(store.posts.len(), "post")
    );

    let sidebar = course_sidebar();
    check_navigation(&store, sidebar)?;
    check_links(config, &store)?;

    prepare_output(config)?;

    let leaves = flatten(sidebar);
    write_home(config)?;
    write_docs(config, &store, &leaves)?;
    write_blog(config, &store)?;
    copy_static_assets(config)?;

    let page_count = store.len() + 2;
    log!(
        "build";
        "rendered {} in {:.0?}",
        plural_count(page_count, "page"),
        start.elapsed()
    );

    Ok(BuiltSite {
        pages: store.site_pages(),
    })
}

/// Validate the sidebar tree against the loaded docs. Fatal on errors.
fn check_navigation(store: &DocStore, sidebar: crate::nav::Sidebar) -> Result<()> {
    let mut diag = ConfigDiagnostics::new();
    validate_nav(sidebar, store, &mut diag);
    diag.print_warnings();
    diag.into_result()
        .map_err(|e| anyhow::anyhow!("navigation validation failed:\n{e}"))
}

/// Resolve every internal link; broken links fail the build unless the
/// configured level downgrades them to warnings.
fn check_links(config: &SiteConfig, store: &DocStore) -> Result<()> {
    if !config.validate.links.enable {
        return Ok(());
    }

    let routes = build_route_table(store);
    let broken = collect_broken_links(config, store, &routes);
    if broken.is_empty() {
        return Ok(());
    }

    for b in &broken {
        log!("error"; "broken link `{}` in {}", b.link, b.source);
    }

    match config.validate.links.level {
        ValidateLevel::Error => bail!(
            "found {}; refusing to publish dead links",
            plural_count(broken.len(), "broken link")
        ),
        ValidateLevel::Warn => {
            log!("warning"; "continuing with {}", plural_count(broken.len(), "broken link"));
            Ok(())
        }
    }
}

/// Create (and optionally clean) the output directory, then write assets.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        log!("build"; "cleaned output directory");
    }

    let output_dir = config.paths().output_dir();
    fs::create_dir_all(&output_dir)?;
    embed::write_embedded_assets(&output_dir)
}

fn write_page(config: &SiteConfig, permalink: &UrlPath, html: &str) -> Result<()> {
    let path = config.paths().output_file(permalink);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))
}

fn write_home(config: &SiteConfig) -> Result<()> {
    let body = render_home(config);
    let permalink = UrlPath::from_page("/");
    let html = render_page(
        config,
        &Page {
            title: HOME_TITLE,
            description: Some(HOME_DESCRIPTION),
            body: &body,
            active: &permalink,
        },
    );
    write_page(config, &permalink, &html)
}

fn write_docs(config: &SiteConfig, store: &DocStore, leaves: &[&'static str]) -> Result<()> {
    store
        .docs
        .par_iter()
        .map(|doc| {
            let html = render_doc_page(config, store, course_sidebar(), leaves, doc);
            write_page(config, &doc.permalink, &html)
        })
        .collect()
}

fn write_blog(config: &SiteConfig, store: &DocStore) -> Result<()> {
    write_page(
        config,
        &UrlPath::from_page("/blog"),
        &render_blog_index(config, store),
    )?;

    store
        .posts
        .par_iter()
        .map(|post| write_page(config, &post.permalink, &render_blog_post(config, post)))
        .collect()
}

/// Copy the static directory verbatim into the output root.
fn copy_static_assets(config: &SiteConfig) -> Result<()> {
    let static_dir = &config.build.static_dir;
    if !static_dir.is_dir() {
        return Ok(());
    }

    let output_dir = config.paths().output_dir();
    let mut copied = 0usize;

    for entry in jwalk::WalkDir::new(static_dir).skip_hidden(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(static_dir).unwrap_or(&path);
        let dest = output_dir.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&path, &dest)
            .with_context(|| format!("Failed to copy {}", path.display()))?;
        copied += 1;
    }

    if copied > 0 {
        log!("assets"; "copied {}", plural_count(copied, "static file"));
    }
    Ok(())
}
