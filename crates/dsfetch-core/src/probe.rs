//! Startup check for the external folder downloader.
//!
//! The downloader is optional at build time but required at run time, so its
//! absence is reported once, with an install command, before anything touches
//! the filesystem.

use crate::config::DownloaderConfig;
use crate::sync::GdownCli;
use thiserror::Error;

/// Install command printed when the downloader cannot be found.
pub const INSTALL_HINT: &str = "pip install gdown";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Required dependency '{program}' is not installed.")]
pub struct MissingDependency {
    pub program: String,
    pub install_hint: String,
}

impl MissingDependency {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            install_hint: INSTALL_HINT.to_string(),
        }
    }
}

/// Resolves the configured downloader on PATH (or as an explicit path) and
/// returns a handle to it.
pub fn check_dependencies(cfg: &DownloaderConfig) -> Result<GdownCli, MissingDependency> {
    match which::which(&cfg.program) {
        Ok(path) => {
            tracing::debug!("found {} at {}", cfg.program, path.display());
            Ok(GdownCli::new(path).with_quiet(cfg.quiet))
        }
        Err(e) => {
            tracing::debug!("lookup of {} failed: {}", cfg.program, e);
            Err(MissingDependency::new(cfg.program.as_str()))
        }
    }
}
