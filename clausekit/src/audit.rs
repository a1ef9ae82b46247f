//! Append-only usage log.
//!
//! One JSON record per line, timestamped in UTC. The engine itself never
//! writes here; drivers record session events (login, analyze, copy) so
//! support can reconstruct what a user did.

use crate::session::Session;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit log io: {0}")]
    Io(#[from] std::io::Error),
    #[error("audit log encode: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct AuditRecord<'a> {
    timestamp: String,
    username: &'a str,
    department: &'a str,
    reinsurer: &'a str,
    event: &'a str,
}

/// Handle on the usage log file inside a log directory.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub const FILE_NAME: &'static str = "clausekit.log";

    /// Open (creating the directory if needed) the usage log under `dir`.
    pub fn open(dir: &Path) -> Result<Self, AuditError> {
        fs::create_dir_all(dir)?;
        Ok(AuditLog {
            path: dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event for the session.
    pub fn record(&self, session: &Session, event: &str) -> Result<(), AuditError> {
        let record = AuditRecord {
            timestamp: Utc::now().to_rfc3339(),
            username: &session.username,
            department: session.department.display_name(),
            reinsurer: &session.reinsurer,
            event,
        };
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
