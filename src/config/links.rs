//! `[navbar]` and `[footer]` link descriptors.
//!
//! Every item carries a label and exactly one destination: `to` for an
//! internal path (validated against the route table at build time) or
//! `href` for an external URL.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// One navigable item (navbar entry or footer link)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    /// Display label.
    pub label: String,
    /// Internal path (site-root-relative, e.g. "/docs/intro").
    pub to: Option<String>,
    /// External URL.
    pub href: Option<String>,
}

impl LinkItem {
    /// Validate the label/destination shape.
    fn validate(&self, field: &str, diag: &mut ConfigDiagnostics) {
        if self.label.is_empty() {
            diag.error(field, "label must not be empty");
        }
        match (&self.to, &self.href) {
            (Some(_), Some(_)) => {
                diag.error(field, format!("'{}' sets both `to` and `href`", self.label));
            }
            (None, None) => {
                diag.error(field, format!("'{}' sets neither `to` nor `href`", self.label));
            }
            (Some(to), None) if !to.starts_with('/') => {
                diag.error_with_hint(
                    field,
                    format!("internal path '{to}' must start with '/'"),
                    "e.g.: to = \"/docs/intro\"",
                );
            }
            _ => {}
        }
    }
}

/// Navbar side placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// One navbar entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarItem {
    #[serde(flatten)]
    pub link: LinkItem,
    pub position: NavPosition,
}

/// Navbar logo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub alt: String,
    /// Path relative to the static directory.
    pub src: String,
}

/// `[navbar]` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Brand title; falls back to site.title when empty.
    pub title: String,
    pub logo: Option<LogoConfig>,
    pub items: Vec<NavbarItem>,
}

impl NavbarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for item in &self.items {
            item.link.validate("navbar.items", diag);
        }
    }

    /// Items for one side, in declaration order.
    pub fn items_at(&self, position: NavPosition) -> impl Iterator<Item = &NavbarItem> {
        self.items.iter().filter(move |i| i.position == position)
    }
}

/// Footer tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Light,
    #[default]
    Dark,
}

/// One labeled group of footer links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<LinkItem>,
}

/// `[footer]` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,
    pub groups: Vec<FooterGroup>,
    /// Copyright template; `{year}` expands to the current calendar year.
    pub copyright: String,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for group in &self.groups {
            if group.title.is_empty() {
                diag.error("footer.groups", "group title must not be empty");
            }
            for item in &group.items {
                item.validate("footer.groups", diag);
            }
        }
    }

    /// Expand the copyright template for a given year.
    pub fn copyright_for_year(&self, year: u16) -> String {
        self.copyright.replace("{year}", &year.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(label: &str, to: &str) -> LinkItem {
        LinkItem {
            label: label.into(),
            to: Some(to.into()),
            href: None,
        }
    }

    fn external(label: &str, href: &str) -> LinkItem {
        LinkItem {
            label: label.into(),
            to: None,
            href: Some(href.into()),
        }
    }

    #[test]
    fn test_item_requires_exactly_one_destination() {
        let mut diag = ConfigDiagnostics::new();
        internal("Documentación", "/docs/intro").validate("navbar.items", &mut diag);
        external("GitHub", "https://github.com/flutter").validate("navbar.items", &mut diag);
        assert!(!diag.has_errors());

        let both = LinkItem {
            label: "Blog".into(),
            to: Some("/blog".into()),
            href: Some("https://example.com".into()),
        };
        let mut diag = ConfigDiagnostics::new();
        both.validate("navbar.items", &mut diag);
        assert!(diag.has_errors());

        let neither = LinkItem {
            label: "Blog".into(),
            to: None,
            href: None,
        };
        let mut diag = ConfigDiagnostics::new();
        neither.validate("navbar.items", &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_internal_path_must_be_rooted() {
        let mut diag = ConfigDiagnostics::new();
        internal("Documentación", "docs/intro").validate("navbar.items", &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_navbar_items_at_preserves_order() {
        let navbar = NavbarConfig {
            items: vec![
                NavbarItem {
                    link: internal("Documentación", "/docs/intro"),
                    position: NavPosition::Left,
                },
                NavbarItem {
                    link: internal("Blog", "/blog"),
                    position: NavPosition::Left,
                },
                NavbarItem {
                    link: external("GitHub", "https://github.com/flutter"),
                    position: NavPosition::Right,
                },
            ],
            ..NavbarConfig::default()
        };

        let left: Vec<_> = navbar
            .items_at(NavPosition::Left)
            .map(|i| i.link.label.as_str())
            .collect();
        assert_eq!(left, ["Documentación", "Blog"]);

        let right: Vec<_> = navbar
            .items_at(NavPosition::Right)
            .map(|i| i.link.label.as_str())
            .collect();
        assert_eq!(right, ["GitHub"]);
    }

    #[test]
    fn test_copyright_year_expansion() {
        let footer = FooterConfig {
            copyright: "Copyright © {year} Flutter Avanzado — Weincode.".into(),
            ..FooterConfig::default()
        };
        assert_eq!(
            footer.copyright_for_year(2026),
            "Copyright © 2026 Flutter Avanzado — Weincode."
        );
    }
}
