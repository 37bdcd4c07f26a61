//! Markdown to HTML conversion using pulldown-cmark.
//!
//! Beyond plain conversion this pass:
//! - assigns ASCII slug ids to headings (Spanish-safe via deunicode),
//!   deduplicating repeats with a numeric suffix;
//! - collects every link and image destination for later validation.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use rustc_hash::FxHashMap;

use crate::utils::slug::slugify;

/// Result of converting one markdown document
#[derive(Debug, Default)]
pub struct RenderedMarkdown {
    /// Converted HTML body.
    pub html: String,
    /// Destinations of all links and images, in document order.
    pub links: Vec<String>,
    /// Heading anchor ids, in document order.
    pub anchors: Vec<String>,
}

/// Enabled markdown extensions (fixed for the whole site)
fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    opts
}

/// Convert a markdown body to HTML.
pub fn render_markdown(source: &str) -> RenderedMarkdown {
    let mut events: Vec<Event<'_>> = Parser::new_ext(source, parser_options()).collect();

    let mut links = Vec::new();
    for event in &events {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) | Event::Start(Tag::Image { dest_url, .. }) => {
                links.push(dest_url.to_string());
            }
            _ => {}
        }
    }

    let anchors = assign_heading_ids(&mut events);

    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, events.into_iter());

    RenderedMarkdown {
        html: out,
        links,
        anchors,
    }
}

/// Give every heading without an explicit `{#id}` a slug id derived from its
/// text. Duplicate slugs get `-1`, `-2`, ... suffixes in document order.
fn assign_heading_ids(events: &mut [Event<'_>]) -> Vec<String> {
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    let mut anchors = Vec::new();
    let mut idx = 0;

    while idx < events.len() {
        let Event::Start(Tag::Heading { id, .. }) = &events[idx] else {
            idx += 1;
            continue;
        };

        let anchor = match id {
            Some(explicit) => explicit.to_string(),
            None => {
                let text = heading_text(&events[idx + 1..]);
                let base = slugify(&text);
                let count = seen.entry(base.clone()).or_insert(0);
                let slug = if *count == 0 {
                    base
                } else {
                    format!("{base}-{count}")
                };
                *count += 1;
                slug
            }
        };

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[idx] {
            *id = Some(CowStr::from(anchor.clone()));
        }
        anchors.push(anchor);
        idx += 1;
    }

    anchors
}

/// Concatenate the text content of a heading (events up to its End tag).
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}
