//! Query command: page metadata as JSON.
//!
//! Emits one object per content document, in store order (docs sorted by
//! id, posts newest first). Useful for scripting against the course
//! content without parsing markdown.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::content::{ContentKind, DocStore};

/// Run the query command.
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    // drafts toggle applies to this command only
    let mut config = config.clone();
    config.build.drafts = args.drafts;

    let store = DocStore::scan(&config)?;
    let entries = collect_entries(&config, &store);

    let output = if args.pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write query output to {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}

fn collect_entries(config: &SiteConfig, store: &DocStore) -> Vec<Value> {
    store
        .iter()
        .map(|doc| {
            json!({
                "id": doc.id,
                "kind": match doc.kind {
                    ContentKind::Doc => "doc",
                    ContentKind::Post => "post",
                },
                "title": doc.meta.title,
                "description": doc.meta.description,
                "date": doc.meta.date,
                "draft": doc.meta.draft,
                "permalink": config.paths().url_for(doc.permalink.as_str()),
                "source": doc.source.display().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    fn site(root: &Path) -> SiteConfig {
        let docs = root.join("content/docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(
            docs.join("intro.md"),
            "+++\ntitle = \"Introducción\"\ndescription = \"Bienvenido\"\n+++\nx\n",
        )
        .unwrap();

        let blog = root.join("content/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("2025-03-10-bienvenida.md"),
            "+++\ntitle = \"Bienvenida\"\ndate = \"2025-03-10\"\n+++\nx\n",
        )
        .unwrap();

        let mut config = test_parse_config("base_url = \"/flutter-avanzado/\"");
        config.build.content = root.join("content");
        config
    }

    #[test]
    fn test_entries_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let config = site(tmp.path());
        let store = DocStore::scan(&config).unwrap();
        let entries = collect_entries(&config, &store);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "intro");
        assert_eq!(entries[0]["kind"], "doc");
        assert_eq!(entries[0]["permalink"], "/flutter-avanzado/docs/intro/");
        assert_eq!(entries[1]["kind"], "post");
        assert_eq!(entries[1]["date"], "2025-03-10");
    }

    #[test]
    fn test_query_writes_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = site(tmp.path());
        let out = tmp.path().join("pages.json");
        let args = QueryArgs {
            drafts: false,
            pretty: true,
            output: Some(out.clone()),
        };

        run_query(&args, &config).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
