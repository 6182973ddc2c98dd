//! Integration test: full fetch pipeline with in-process fake downloaders.
//!
//! Covers the observable contract of a run: directory preparation, best-effort
//! sync, and an audit that reflects what is actually on disk.

use dsfetch_core::config::DEFAULT_SOURCE_URL;
use dsfetch_core::console::Console;
use dsfetch_core::fetch::{fetch_dataset, FetchJob, FetchOutcome, SyncStatus};
use dsfetch_core::probe::MissingDependency;
use dsfetch_core::sync::{FolderDownloader, SyncError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Writes a fixed set of files into the destination.
struct Populate(&'static [&'static str]);

impl FolderDownloader for Populate {
    fn name(&self) -> &str {
        "populate"
    }

    fn download_folder(&self, _url: &str, dest: &Path) -> Result<(), SyncError> {
        for name in self.0 {
            fs::write(dest.join(name), b"payload").unwrap();
        }
        Ok(())
    }
}

/// Writes some files, then fails like a downloader that lost the connection.
struct Broken(&'static [&'static str]);

impl FolderDownloader for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn download_folder(&self, _url: &str, dest: &Path) -> Result<(), SyncError> {
        for name in self.0 {
            fs::write(dest.join(name), b"partial").unwrap();
        }
        Err(SyncError::Exit {
            program: "broken".to_string(),
            code: Some(1),
        })
    }
}

fn job(output_dir: &Path) -> FetchJob {
    FetchJob {
        source_url: DEFAULT_SOURCE_URL.to_string(),
        output_dir: output_dir.to_path_buf(),
        extension: ".mat".to_string(),
    }
}

fn run<D: FolderDownloader>(job: &FetchJob, downloader: D) -> (FetchOutcome, String) {
    let mut console = Console::new(Vec::new());
    let outcome = fetch_dataset(job, || Ok::<_, MissingDependency>(downloader), &mut console)
        .expect("fetch_dataset");
    let out = String::from_utf8(console.into_inner()).unwrap();
    (outcome, out)
}

#[test]
fn successful_sync_reports_only_matching_files() {
    let root = tempdir().unwrap();
    let job = job(&root.path().join("dataset"));

    let (outcome, out) = run(&job, Populate(&["a.mat", "b.mat", "notes.txt"]));

    assert!(outcome.created_output_dir);
    assert_eq!(outcome.sync, SyncStatus::Completed);
    assert_eq!(outcome.audit.count(), 2);
    assert_eq!(outcome.audit.files, ["a.mat", "b.mat"]);
    assert!(out.contains("INFO: Initialized local data directory: "));
    assert!(out.contains("INFO: Available Datasets (2): a.mat, b.mat\n"));
}

#[test]
fn failed_sync_still_audits_partial_contents() {
    let root = tempdir().unwrap();
    let job = job(&root.path().join("dataset"));

    let (outcome, out) = run(&job, Broken(&["a.mat"]));

    assert_eq!(
        outcome.sync,
        SyncStatus::Failed("broken exited with status 1".to_string())
    );
    assert_eq!(outcome.audit.files, ["a.mat"]);
    assert!(out.contains("ERROR: Synchronization failed: broken exited with status 1"));
    assert!(out.contains(
        "WARNING: Check your internet connection and verify that the shared folder is public."
    ));
    assert!(!out.contains("Dataset synchronization complete!"));
    assert!(out.contains("INFO: Available Datasets (1): a.mat\n"));
}

#[test]
fn failed_sync_on_empty_dir_reports_zero() {
    let root = tempdir().unwrap();
    let job = job(&root.path().join("dataset"));

    let (outcome, out) = run(&job, Broken(&[]));

    assert!(matches!(outcome.sync, SyncStatus::Failed(_)));
    assert_eq!(outcome.audit.count(), 0);
    assert!(outcome.audit.files.is_empty());
    assert!(out.contains("INFO: Available Datasets (0): \n"));
}

/// Deletes the destination, leaving nothing for the audit to list.
struct Remover;

impl FolderDownloader for Remover {
    fn name(&self) -> &str {
        "remover"
    }

    fn download_folder(&self, _url: &str, dest: &Path) -> Result<(), SyncError> {
        fs::remove_dir(dest).unwrap();
        Ok(())
    }
}

#[test]
fn unlistable_output_dir_gives_empty_audit_and_warning() {
    let root = tempdir().unwrap();
    let dir = root.path().join("dataset");
    let job = job(&dir);

    let (outcome, out) = run(&job, Remover);

    assert_eq!(outcome.sync, SyncStatus::Completed);
    assert_eq!(outcome.audit.count(), 0);
    assert_eq!(outcome.audit.dir, dir);
    assert!(out.contains(&format!("WARNING: Could not list {}: ", dir.display())));
    assert!(out.contains("INFO: Available Datasets (0): \n"));
}

#[test]
fn no_matching_files_is_not_an_error() {
    let root = tempdir().unwrap();
    let job = job(&root.path().join("dataset"));

    let (outcome, _) = run(&job, Populate(&["readme.md", "labels.csv"]));

    assert_eq!(outcome.sync, SyncStatus::Completed);
    assert_eq!(outcome.audit.count(), 0);
}

#[test]
fn rerun_keeps_existing_files_and_does_not_reinitialize() {
    let root = tempdir().unwrap();
    let dir = root.path().join("dataset");
    let job = job(&dir);

    let (first, _) = run(&job, Populate(&["a.mat"]));
    assert!(first.created_output_dir);
    fs::write(dir.join("local-only.mat"), b"mine").unwrap();

    let (second, out) = run(&job, Populate(&["b.mat"]));

    assert!(!second.created_output_dir);
    assert!(!out.contains("Initialized local data directory"));
    assert_eq!(second.audit.files, ["a.mat", "b.mat", "local-only.mat"]);
    assert_eq!(fs::read(dir.join("local-only.mat")).unwrap(), b"mine");
}

#[test]
fn audit_path_is_absolute() {
    let root = tempdir().unwrap();
    let job = job(&root.path().join("dataset"));

    let (outcome, out) = run(&job, Populate(&[]));

    assert!(outcome.audit.dir.is_absolute());
    assert!(out.contains(&format!(
        "INFO: Local Storage Path: {}",
        outcome.audit.dir.display()
    )));
}

#[test]
fn other_extensions_can_be_audited() {
    let root = tempdir().unwrap();
    let mut job = job(&root.path().join("dataset"));
    job.extension = ".npz".to_string();

    let (outcome, _) = run(&job, Populate(&["x.npz", "y.mat"]));

    assert_eq!(outcome.audit.files, ["x.npz"]);
}
