use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Shared folder holding the multi-view `.mat` datasets.
pub const DEFAULT_SOURCE_URL: &str =
    "https://drive.google.com/drive/folders/1TyiQNOuCH7zn0R55EfxM4mUwB05VsoMf?usp=drive_link";
pub const DEFAULT_OUTPUT_DIR: &str = "./dataset";
pub const DEFAULT_EXTENSION: &str = ".mat";
pub const DEFAULT_DOWNLOADER: &str = "gdown";

/// External folder downloader settings (`[downloader]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloaderConfig {
    /// Program name looked up on PATH, or a path to the executable.
    pub program: String,
    /// Suppress the downloader's own progress output.
    pub quiet: bool,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_DOWNLOADER.to_string(),
            quiet: false,
        }
    }
}

/// Global configuration loaded from `~/.config/dsfetch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsfetchConfig {
    /// Shared folder URL to mirror.
    pub source_url: String,
    /// Local directory the folder is mirrored into.
    pub output_dir: PathBuf,
    /// Suffix of the dataset files reported by the audit.
    pub extension: String,
    pub downloader: DownloaderConfig,
}

impl Default for DsfetchConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            downloader: DownloaderConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DsfetchConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`], against an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<DsfetchConfig> {
    if !path.exists() {
        let default_cfg = DsfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DsfetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
