//! `[theme]` configuration: color mode and syntax highlighting.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme settings rendered into the page shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color mode behavior.
    pub color_mode: ColorModeConfig,

    /// Social card image path (relative to the static directory).
    pub social_card: String,

    /// Extra languages the highlighter should load, beyond its defaults.
    /// Emitted as `data-highlight` on `<body>` for the highlight script.
    pub highlight: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorModeConfig::default(),
            social_card: String::new(),
            highlight: Vec::new(),
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for lang in &self.highlight {
            if lang.is_empty() || !lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                diag.error(
                    "theme.highlight",
                    format!("'{lang}' is not a valid language identifier"),
                );
            }
        }
    }
}

/// Color scheme selection behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    /// Scheme used when the visitor has no stored preference.
    pub default: ColorScheme,

    /// Follow `prefers-color-scheme` instead of the default scheme.
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            default: ColorScheme::Light,
            respect_prefers_color_scheme: false,
        }
    }
}

impl ColorModeConfig {
    /// Value for the `data-color-mode` attribute on `<html>`.
    pub fn html_attr(&self) -> &'static str {
        if self.respect_prefers_color_scheme {
            "auto"
        } else {
            match self.default {
                ColorScheme::Light => "light",
                ColorScheme::Dark => "dark",
            }
        }
    }
}

/// Fixed color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}
