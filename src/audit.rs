// src/audit.rs

//! Append-only audit log of link removals.
//!
//! One file per run: a fixed header, then one line per removal. Lines are
//! flushed as they are written so an abrupt termination never loses an
//! already-recorded removal.

use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};

/// First line of every audit log file.
pub const LOG_HEADER: &str = "Unreachable Links Log";

/// Handle to an open audit log file.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    file: File,
}

impl AuditLog {
    /// Create (or truncate) the log file at `path` and write the header
    /// followed by a blank line.
    ///
    /// Fails with an audit error if the path is not writable, before any
    /// post is touched.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .await
            .map_err(|e| AppError::audit(path.display().to_string(), e))?;

        let mut log = Self { path, file };
        log.write_line(LOG_HEADER).await?;
        log.write_line("").await?;
        Ok(log)
    }

    /// Append one line and flush it to disk.
    pub async fn append(&mut self, line: &str) -> Result<()> {
        self.write_line(line).await
    }

    /// Where this log is being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file
            .write_all(buf.as_bytes())
            .await
            .map_err(|e| AppError::audit(self.path.display().to_string(), e))?;
        self.file
            .flush()
            .await
            .map_err(|e| AppError::audit(self.path.display().to_string(), e))?;
        Ok(())
    }
}

/// Default log file name for a run starting at `now`, matching
/// `unreachable_links_log_<timestamp>.txt`.
pub fn default_log_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!(
        "unreachable_links_log_{}.txt",
        now.format("%Y-%m-%d_%H-%M-%S")
    )
}
