//! Output directory preparation.

use std::fs;
use std::io;
use std::path::Path;

/// Creates `path` (and missing parents) unless it is already a directory.
///
/// Returns `true` when the directory was created by this call. Existing
/// contents are left alone.
pub fn ensure_output_dir(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}
