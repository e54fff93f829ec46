use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};

/// Severity of a run-log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warn => write!(f, "Warn"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// Append-only writer for the per-run collection log.
///
/// Every line is `<RFC-3339 timestamp>  <level>: <message>`, flushed
/// before the call returns so the log survives an abrupt process exit.
/// When the log is disabled the writer is inert and no file is ever
/// created.
pub struct RunLog {
    file: Option<File>,
    path: PathBuf,
}

impl RunLog {
    /// Open the log for appending, creating the file if absent. The
    /// parent directory must already exist. With `enabled` false the
    /// returned writer performs no I/O at all.
    pub fn open(path: &Path, enabled: bool) -> Result<Self> {
        let file = if enabled {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open run log at {}", path.display()))?;
            Some(file)
        } else {
            None
        };

        Ok(RunLog {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line. A write failure is fatal to the run.
    pub fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        writeln!(file, "{}  {}: {}", timestamp, level, message)
            .with_context(|| format!("Failed to write to run log at {}", self.path.display()))?;
        file.flush()
            .with_context(|| format!("Failed to flush run log at {}", self.path.display()))?;

        Ok(())
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Error, message)
    }
}
