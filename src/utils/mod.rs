//! Shared helpers: dates, HTML escaping, paths, slugs, pluralized log text.

pub mod date;
pub mod html;
pub mod path;
pub mod slug;

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// `plural_count(1, "file")` -> `"1 file"`, `plural_count(5, "file")` -> `"5 files"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
