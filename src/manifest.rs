//! Requirement manifest reading.
//!
//! The manifest's format is owned by the package-manager ecosystem; cairn
//! reads it only to report how many requirements are about to be
//! installed. An unreadable manifest is not a failure here — the install
//! step still runs and the package manager reports the problem itself.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// A parsed view of the requirement manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    entries: Vec<String>,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            entries: parse_entries(&text),
        })
    }

    /// Path the manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Requirement specifiers, in declaration order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of requirement specifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest declares no requirements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split manifest text into requirement specifiers.
///
/// Blank lines and `#` comment lines are skipped; everything else is
/// passed through verbatim for the package manager to interpret.
fn parse_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let text = "# GUI toolkit\nPyQt5\n\nrequests\n  \n# trailing comment\n";
        let entries = parse_entries(text);
        assert_eq!(entries, vec!["PyQt5", "requests"]);
    }

    #[test]
    fn parse_keeps_version_specifiers_verbatim() {
        let entries = parse_entries("requests>=2.28,<3\n");
        assert_eq!(entries, vec!["requests>=2.28,<3"]);
    }

    #[test]
    fn parse_empty_text_yields_no_entries() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries("\n\n# only comments\n").is_empty());
    }

    #[test]
    fn load_reads_entries_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "PyQt5\nrequests\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);
        assert!(!manifest.is_empty());
        assert_eq!(manifest.path(), path);
        assert_eq!(manifest.entries(), ["PyQt5", "requests"]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = Manifest::load(&temp.path().join("nope.txt"));
        assert!(result.is_err());
    }
}
