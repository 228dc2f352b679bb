//! Application layer errors.
//!
//! These errors represent failures while carrying out a sync, not layout
//! rules. Layout errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during sync orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The generated template is not where it should be.
    #[error("Expected generated outbound template at {}", path.display())]
    MissingSourceFile { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Filesystem adapter state is unusable (lock poisoned).
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingSourceFile { path } => vec![
                format!("No file at: {}", path.display()),
                "Generate the element templates before syncing".into(),
                "Check that --project-root points at the connector project".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the path is a regular file, not a directory".into(),
            ],
            Self::LockPoisoned => vec!["This appears to be a bug; try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSourceFile { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
