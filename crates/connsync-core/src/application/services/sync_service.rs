//! Sync Service - copies the connector template into place.
//!
//! Workflow:
//! 1. Confirm the source template exists
//! 2. Ensure the target directory exists
//! 3. Copy source bytes over the target
//!
//! Nothing is written until step 1 succeeds.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::SyncLayout,
    error::ConnsyncResult,
};

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub bytes_copied: u64,
    /// A previous target file was replaced.
    pub overwritten: bool,
}

/// Outcome of comparing source and target without writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    UpToDate,
    Stale,
    TargetMissing,
}

impl SyncStatus {
    pub fn is_up_to_date(self) -> bool {
        matches!(self, Self::UpToDate)
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpToDate => write!(f, "up to date"),
            Self::Stale => write!(f, "stale"),
            Self::TargetMissing => write!(f, "missing"),
        }
    }
}

/// Template sync service.
pub struct SyncService {
    filesystem: Box<dyn Filesystem>,
}

impl SyncService {
    /// Create a new sync service over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Copy the source template over the target, creating directories as needed.
    ///
    /// Fails with [`ApplicationError::MissingSourceFile`] before touching the
    /// filesystem if the source is absent.
    #[instrument(
        skip_all,
        fields(
            source_path = %layout.source().display(),
            target_path = %layout.target().display()
        )
    )]
    pub fn sync(&self, layout: &SyncLayout) -> ConnsyncResult<SyncReport> {
        self.require_source(layout)?;

        if let Some(dir) = layout.target_dir() {
            debug!(dir = %dir.display(), "Ensuring target directory");
            self.filesystem.create_dir_all(dir)?;
        }

        let overwritten = self.filesystem.exists(layout.target());
        let bytes_copied = self
            .filesystem
            .copy_file(layout.source(), layout.target())?;

        info!(bytes = bytes_copied, overwritten, "Template synced");

        Ok(SyncReport {
            source: layout.source().to_path_buf(),
            target: layout.target().to_path_buf(),
            bytes_copied,
            overwritten,
        })
    }

    /// Compare source and target bytes. Never writes.
    #[instrument(skip_all, fields(target_path = %layout.target().display()))]
    pub fn check(&self, layout: &SyncLayout) -> ConnsyncResult<SyncStatus> {
        self.require_source(layout)?;

        if !self.filesystem.exists(layout.target()) {
            return Ok(SyncStatus::TargetMissing);
        }

        let source = self.filesystem.read(layout.source())?;
        let target = self.filesystem.read(layout.target())?;

        let status = if source == target {
            SyncStatus::UpToDate
        } else {
            SyncStatus::Stale
        };
        debug!(%status, "Check finished");
        Ok(status)
    }

    fn require_source(&self, layout: &SyncLayout) -> ConnsyncResult<()> {
        if self.filesystem.exists(layout.source()) {
            Ok(())
        } else {
            Err(ApplicationError::MissingSourceFile {
                path: layout.source().to_path_buf(),
            }
            .into())
        }
    }
}
