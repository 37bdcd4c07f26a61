//! `[validate]` configuration for link checking.

use serde::{Deserialize, Serialize};

/// How validation failures are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Fail the build. The site's policy: never publish a dead link.
    #[default]
    Error,
    /// Report and continue.
    Warn,
}

/// Link validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Internal link checking (pages referenced by content and chrome).
    pub links: LinkCheckConfig,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            links: LinkCheckConfig::default(),
        }
    }
}

/// Internal link check settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkCheckConfig {
    pub enable: bool,
    pub level: ValidateLevel,
}

impl Default for LinkCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::Error,
        }
    }
}
