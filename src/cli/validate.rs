//! Site validation command.
//!
//! Runs the same checks as the build (navigation integrity, internal link
//! resolution) without writing any output.

use anyhow::{Result, bail};

use crate::cli::common::{BrokenLink, build_route_table, collect_broken_links};
use crate::config::{ConfigDiagnostics, SiteConfig, ValidateLevel};
use crate::content::DocStore;
use crate::log;
use crate::nav::{course_sidebar, validate as validate_nav};
use crate::utils::{plural_count, plural_s};

/// Validate navigation and internal links.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let store = DocStore::scan(config)?;

    if store.is_empty() {
        log!("validate"; "no content files found");
        return Ok(());
    }

    log!("validate"; "checking {}", plural_count(store.len(), "page"));

    // navigation integrity first; a broken tree makes link results noise
    let mut diag = ConfigDiagnostics::new();
    validate_nav(course_sidebar(), &store, &mut diag);
    diag.print_warnings();
    let nav_result = diag.into_result();

    let broken = if config.validate.links.enable {
        let routes = build_route_table(&store);
        collect_broken_links(config, &store, &routes)
    } else {
        log!("validate"; "link checks disabled");
        Vec::new()
    };

    print_report(&broken);

    if config.validate.links.enable {
        if broken.is_empty() {
            log!("validate"; "all internal links valid");
        } else {
            log!("validate"; "found {}", plural_count(broken.len(), "broken link"));
        }
    }

    match nav_result {
        Err(e) => bail!("navigation validation failed:\n{e}"),
        Ok(()) if broken.is_empty() => Ok(()),
        Ok(()) => match config.validate.links.level {
            ValidateLevel::Warn => Ok(()),
            ValidateLevel::Error => bail!(
                "validation failed: {} broken link{}",
                broken.len(),
                plural_s(broken.len())
            ),
        },
    }
}

/// Print broken links grouped by source.
fn print_report(broken: &[BrokenLink]) {
    let mut last_source: Option<&str> = None;
    for b in broken {
        if last_source != Some(b.source.as_str()) {
            log!("validate"; "{}:", b.source);
            last_source = Some(b.source.as_str());
        }
        log!("validate"; "  -> `{}` not found", b.link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::nav::flatten;
    use std::fs;
    use std::path::Path;

    fn site_with_course(root: &Path) -> SiteConfig {
        for id in flatten(course_sidebar()) {
            let path = root.join("content/docs").join(format!("{id}.md"));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "+++\ntitle = \"T\"\n+++\nx\n").unwrap();
        }
        let mut config = test_parse_config("");
        config.build.content = root.join("content");
        config
    }

    #[test]
    fn test_valid_site_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let config = site_with_course(tmp.path());
        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_empty_site_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("");
        config.build.content = tmp.path().join("content");
        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_broken_link_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let config = site_with_course(tmp.path());
        fs::write(
            tmp.path().join("content/docs/intro.md"),
            "+++\ntitle = \"Intro\"\n+++\n[rota](/docs/nada)\n",
        )
        .unwrap();

        let err = validate_site(&config).unwrap_err();
        assert!(err.to_string().contains("1 broken link"));
    }

    #[test]
    fn test_warn_only_passes_with_broken_link() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = site_with_course(tmp.path());
        config.validate.links.level = ValidateLevel::Warn;
        fs::write(
            tmp.path().join("content/docs/intro.md"),
            "+++\ntitle = \"Intro\"\n+++\n[rota](/docs/nada)\n",
        )
        .unwrap();

        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_missing_nav_doc_fails_even_warn_only() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = site_with_course(tmp.path());
        config.validate.links.level = ValidateLevel::Warn;
        fs::remove_file(tmp.path().join("content/docs/intro.md")).unwrap();

        let err = validate_site(&config).unwrap_err();
        assert!(err.to_string().contains("navigation validation failed"));
    }
}
