//! Configuration errors and collected diagnostics.

use std::path::PathBuf;
use thiserror::Error;

use crate::log;

/// Typed configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{0}")]
    Diagnostics(String),
}

/// Collected validation diagnostics.
///
/// Validation walks every section and reports all errors at once instead of
/// failing on the first; warnings are printed and do not fail the load.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fatal error for a config field.
    pub fn error(&mut self, field: &str, message: impl AsRef<str>) {
        self.errors.push(format!("{field}: {}", message.as_ref()));
    }

    /// Record a fatal error with a fix-it hint.
    pub fn error_with_hint(
        &mut self,
        field: &str,
        message: impl AsRef<str>,
        hint: impl AsRef<str>,
    ) {
        self.errors.push(format!(
            "{field}: {} (hint: {})",
            message.as_ref(),
            hint.as_ref()
        ));
    }

    /// Record a non-fatal warning.
    pub fn warn(&mut self, field: &str, message: impl AsRef<str>) {
        self.warnings.push(format!("{field}: {}", message.as_ref()));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Print collected warnings (grouped, once).
    pub fn print_warnings(&self) {
        for warning in &self.warnings {
            log!("warning"; "{}", warning);
        }
    }

    /// Consume into a result; errors are joined into one message.
    pub fn into_result(self) -> Result<(), String> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.join("\n"))
        }
    }
}
