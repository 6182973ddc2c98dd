//! User-facing console sink.
//!
//! Every step reports through a `Console` handed down from `main`, so tests
//! can capture the exact lines a user would see. Each leveled line is also
//! emitted as a `tracing` event for the log file.

use std::fmt;
use std::io::Write;

/// Width of the `=` rule framing the audit summary.
pub const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

/// Line-oriented writer producing `LEVEL: message` output.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn info(&mut self, msg: impl fmt::Display) {
        tracing::info!("{}", msg);
        self.emit(Level::Info, &msg);
    }

    pub fn warn(&mut self, msg: impl fmt::Display) {
        tracing::warn!("{}", msg);
        self.emit(Level::Warning, &msg);
    }

    pub fn error(&mut self, msg: impl fmt::Display) {
        tracing::error!("{}", msg);
        self.emit(Level::Error, &msg);
    }

    /// Writes a line with no level prefix (install instructions and the like).
    pub fn plain(&mut self, line: impl fmt::Display) {
        let _ = writeln!(self.out, "{}", line);
    }

    /// Info line consisting of a `=` rule.
    pub fn rule(&mut self) {
        self.emit(Level::Info, &"=".repeat(RULE_WIDTH));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // A closed stdout must not abort the run, so write errors are dropped.
    fn emit(&mut self, level: Level, msg: &dyn fmt::Display) {
        let _ = writeln!(self.out, "{}: {}", level.label(), msg);
    }
}
