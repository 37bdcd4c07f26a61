//! Assets embedded in the binary.
//!
//! The site ships a single stylesheet; embedding it keeps `aula build`
//! self-contained (no theme directory to locate at runtime).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::debug;

/// The site stylesheet, written to the output root on every build.
pub const STYLESHEET: &str = include_str!("../../assets/style.css");

/// Write embedded assets into the output directory.
pub fn write_embedded_assets(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let css_path = output_dir.join("style.css");
    fs::write(&css_path, STYLESHEET)
        .with_context(|| format!("Failed to write {}", css_path.display()))?;

    debug!("assets"; "wrote embedded style.css");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_not_empty() {
        assert!(STYLESHEET.contains(".feature-card"));
        assert!(STYLESHEET.contains(".sidebar"));
    }

    #[test]
    fn test_write_embedded_assets() {
        let tmp = tempfile::tempdir().unwrap();
        write_embedded_assets(tmp.path()).unwrap();
        let css = std::fs::read_to_string(tmp.path().join("style.css")).unwrap();
        assert_eq!(css, STYLESHEET);
    }
}
