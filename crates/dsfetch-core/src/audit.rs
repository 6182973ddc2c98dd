//! Post-sync audit of the output directory.
//!
//! Reports what is actually on disk, independent of what the downloader
//! claimed to do.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Entries of the output directory whose name ends with the audited extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Output directory, absolute when it could be resolved.
    pub dir: PathBuf,
    /// Matching entry names, sorted.
    pub files: Vec<String>,
}

impl AuditReport {
    pub fn empty(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            files: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// Names joined the way the summary line prints them.
    pub fn joined_names(&self) -> String {
        self.files.join(", ")
    }
}

/// Lists `dir` and keeps entries whose name ends with `extension` (case-sensitive).
pub fn audit_dir(dir: &Path, extension: &str) -> io::Result<AuditReport> {
    let files = matching_names(dir, extension)?;
    let dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    Ok(AuditReport { dir, files })
}

fn matching_names(dir: &Path, extension: &str) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.ends_with(extension) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
