//! ASCII slugs for heading anchors and blog routes.
//!
//! Course content is Spanish, so transliteration matters:
//! "¿Qué sigue?" must become `que-sigue`, not an empty string.

use deunicode::deunicode;

/// Slugify a string into a lowercase ASCII anchor.
///
/// Transliterates via deunicode, lowercases, maps everything that is not
/// alphanumeric to `-`, and collapses runs of `-`.
pub fn slugify(s: &str) -> String {
    let ascii = deunicode(s);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true; // suppress leading dashes

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
