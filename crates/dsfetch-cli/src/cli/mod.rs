//! CLI for the dsfetch dataset fetcher.

use anyhow::Result;
use clap::Parser;
use dsfetch_core::config::{self, DsfetchConfig};
use dsfetch_core::console::Console;
use dsfetch_core::fetch::{self, FetchJob};
use dsfetch_core::probe;
use std::io::{self, Write};
use std::path::PathBuf;

/// Top-level CLI: one run mirrors one shared folder.
#[derive(Debug, Parser)]
#[command(name = "dsfetch", version)]
#[command(about = "dsfetch: download a shared dataset folder and audit the result", long_about = None)]
#[command(
    after_help = "Unset options fall back to ~/.config/dsfetch/config.toml, then to built-in defaults."
)]
pub struct Cli {
    /// Shared folder URL [default: the multi-view dataset folder on Google Drive].
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Local directory to save the datasets into [default: ./dataset].
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// File suffix counted by the post-download audit [default: .mat].
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Folder downloader program, looked up on PATH [default: gdown].
    #[arg(long, value_name = "PROGRAM")]
    pub downloader: Option<String>,

    /// Hide the downloader's progress output.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut console = Console::new(io::stdout());
        let cfg = load_config(&mut console);
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(cfg, &mut console)
    }

    /// Flags given on the command line win over config values.
    pub fn apply(&self, mut cfg: DsfetchConfig) -> DsfetchConfig {
        if let Some(url) = &self.url {
            cfg.source_url = url.clone();
        }
        if let Some(output) = &self.output {
            cfg.output_dir = output.clone();
        }
        if let Some(extension) = &self.extension {
            cfg.extension = extension.clone();
        }
        if let Some(program) = &self.downloader {
            cfg.downloader.program = program.clone();
        }
        if self.quiet {
            cfg.downloader.quiet = true;
        }
        cfg
    }

    fn run<W: Write>(&self, cfg: DsfetchConfig, console: &mut Console<W>) -> Result<()> {
        let cfg = self.apply(cfg);
        let job = FetchJob::from_config(&cfg);
        let outcome = fetch::fetch_dataset(
            &job,
            || probe::check_dependencies(&cfg.downloader),
            console,
        )?;
        tracing::info!(
            "run complete: {} matching file(s) in {}",
            outcome.audit.count(),
            outcome.audit.dir.display()
        );
        Ok(())
    }
}

/// A broken or unreachable config file never stops a run; defaults are used instead.
fn load_config<W: Write>(console: &mut Console<W>) -> DsfetchConfig {
    match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(e) => {
            console.warn(format_args!("Ignoring config file ({:#}); using defaults.", e));
            DsfetchConfig::default()
        }
    }
}
