//! `gdown` command-line tool as a folder downloader.
//!
//! Runs `gdown --folder <url> -O <dest> --remaining-ok` in a child process and
//! waits for it. Stdout/stderr are inherited so the tool's progress bars show.

use super::{FolderDownloader, SyncError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

#[derive(Debug, Clone)]
pub struct GdownCli {
    program: PathBuf,
    name: String,
    quiet: bool,
}

impl GdownCli {
    /// `program` is the resolved executable (see `probe::check_dependencies`).
    pub fn new(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());
        Self {
            program,
            name,
            quiet: false,
        }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the tool for one folder download.
    pub(crate) fn command_args(&self, url: &str, dest: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--folder".into(),
            url.into(),
            "-O".into(),
            without_trailing_separator(dest).into_os_string(),
            // keep going when some files in the folder cannot be fetched
            "--remaining-ok".into(),
        ];
        if self.quiet {
            args.push("--quiet".into());
        }
        args
    }
}

impl FolderDownloader for GdownCli {
    fn name(&self) -> &str {
        &self.name
    }

    fn download_folder(&self, url: &str, dest: &Path) -> Result<(), SyncError> {
        let args = self.command_args(url, dest);
        tracing::debug!(
            "spawning {} with args {:?}",
            self.program.display(),
            args
        );

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| SyncError::Spawn {
                program: self.name.clone(),
                source,
            })?;

        check_status(&self.name, status)
    }
}

fn check_status(program: &str, status: ExitStatus) -> Result<(), SyncError> {
    if status.success() {
        return Ok(());
    }
    Err(SyncError::Exit {
        program: program.to_string(),
        code: status.code(),
    })
}

/// gdown nests the download under the remote folder name when the output
/// path ends with a separator; normalizing keeps files directly in `dest`.
fn without_trailing_separator(dest: &Path) -> PathBuf {
    let normalized: PathBuf = dest.components().collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
