//! Folder sync: hand a shared folder URL and a destination to an external
//! folder downloader.
//!
//! The downloader owns transport and remote traversal. It is expected to
//! keep going past individual file failures; whatever it reports as an error
//! is surfaced as a `SyncError` for the caller to log.

mod folder_url;
mod gdown;

pub use folder_url::{drive_folder_id, parse_folder_url};
pub use gdown::GdownCli;

use std::io;
use std::path::Path;
use thiserror::Error;

/// Something that can mirror a remote folder into a local directory.
pub trait FolderDownloader {
    /// Short name used in log lines.
    fn name(&self) -> &str;

    /// Recursively copies every file of the folder at `url` into `dest`.
    /// `dest` exists when this is called.
    fn download_folder(&self, url: &str, dest: &Path) -> Result<(), SyncError>;
}

impl<D: FolderDownloader + ?Sized> FolderDownloader for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn download_folder(&self, url: &str, dest: &Path) -> Result<(), SyncError> {
        (**self).download_folder(url, dest)
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid folder URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Non-zero exit; `code` is `None` when the process was killed by a signal.
    #[error("{} {}", .program, describe_exit(.code))]
    Exit { program: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
