//! Dataset fetch pipeline: dependency check, directory preparation, folder
//! sync, audit.
//!
//! Only a missing downloader or an output directory that cannot be created
//! stop the run. A failed sync is logged with a remediation hint and the
//! audit still runs against whatever is on disk.

use crate::audit::{self, AuditReport};
use crate::config::DsfetchConfig;
use crate::console::Console;
use crate::prepare;
use crate::probe::MissingDependency;
use crate::sync::{self, FolderDownloader, SyncError};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Inputs of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub source_url: String,
    pub output_dir: PathBuf,
    pub extension: String,
}

impl FetchJob {
    pub fn from_config(cfg: &DsfetchConfig) -> Self {
        Self {
            source_url: cfg.source_url.clone(),
            output_dir: cfg.output_dir.clone(),
            extension: cfg.extension.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Completed,
    /// Sync error message; the run went on to the audit anyway.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub created_output_dir: bool,
    pub sync: SyncStatus,
    pub audit: AuditReport,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    MissingDependency(#[from] MissingDependency),

    #[error("cannot prepare output directory {}: {source}", .path.display())]
    PrepareOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs the whole pipeline.
///
/// `probe` is called first and yields the folder downloader; when it fails the
/// install instructions are written to `console` and nothing else happens.
pub fn fetch_dataset<D, P, W>(
    job: &FetchJob,
    probe: P,
    console: &mut Console<W>,
) -> Result<FetchOutcome, FetchError>
where
    D: FolderDownloader,
    P: FnOnce() -> Result<D, MissingDependency>,
    W: Write,
{
    let downloader = match probe() {
        Ok(d) => d,
        Err(missing) => {
            report_missing(&missing, console);
            return Err(missing.into());
        }
    };

    let created_output_dir =
        prepare::ensure_output_dir(&job.output_dir).map_err(|source| FetchError::PrepareOutput {
            path: job.output_dir.clone(),
            source,
        })?;
    if created_output_dir {
        console.info(format_args!(
            "Initialized local data directory: {}",
            job.output_dir.display()
        ));
    }

    let sync = match sync_folder(&downloader, job, console) {
        Ok(()) => {
            console.rule();
            console.info("Dataset synchronization complete!");
            SyncStatus::Completed
        }
        Err(e) => {
            console.error(format_args!("Synchronization failed: {}", e));
            console.warn(
                "Check your internet connection and verify that the shared folder is public.",
            );
            console.rule();
            SyncStatus::Failed(e.to_string())
        }
    };

    let audit = audit_output(job, console);
    tracing::debug!(
        "fetch finished: created_dir={} sync={:?} matches={}",
        created_output_dir,
        sync,
        audit.count()
    );

    Ok(FetchOutcome {
        created_output_dir,
        sync,
        audit,
    })
}

fn report_missing<W: Write>(missing: &MissingDependency, console: &mut Console<W>) {
    console.error(missing);
    console.plain("");
    console.plain("Fix: Please install it using the following command:");
    console.plain(format_args!("    {}", missing.install_hint));
    console.plain("");
}

fn sync_folder<D: FolderDownloader, W: Write>(
    downloader: &D,
    job: &FetchJob,
    console: &mut Console<W>,
) -> Result<(), SyncError> {
    let raw = job.source_url.trim();
    let url = sync::parse_folder_url(raw).map_err(|source| SyncError::InvalidUrl {
        url: job.source_url.clone(),
        source,
    })?;

    let folder_id = sync::drive_folder_id(&url);
    if folder_id.is_some() {
        console.info("Connecting to Google Drive remote storage...");
    } else {
        console.info("Connecting to remote storage...");
    }
    console.info(format_args!("Remote URL: {}", raw));
    if let Some(id) = folder_id {
        console.info(format_args!("Folder ID: {}", id));
    }

    tracing::info!(
        "{} downloading {} into {}",
        downloader.name(),
        raw,
        job.output_dir.display()
    );
    downloader.download_folder(raw, &job.output_dir)
}

fn audit_output<W: Write>(job: &FetchJob, console: &mut Console<W>) -> AuditReport {
    let report = match audit::audit_dir(&job.output_dir, &job.extension) {
        Ok(report) => report,
        Err(e) => {
            console.warn(format_args!(
                "Could not list {}: {}",
                job.output_dir.display(),
                e
            ));
            AuditReport::empty(&job.output_dir)
        }
    };

    console.info(format_args!("Local Storage Path: {}", report.dir.display()));
    console.info(format_args!(
        "Available Datasets ({}): {}",
        report.count(),
        report.joined_names()
    ));
    console.rule();
    report
}
