//! Unified error handling for connsync core.
//!
//! Wraps domain and application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for connsync core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConnsyncError {
    /// Layout rule violations.
    #[error("Layout error: {0}")]
    Domain(#[from] DomainError),

    /// Failures while syncing.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ConnsyncError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type ConnsyncResult<T> = Result<T, ConnsyncError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn missing_source_is_not_found_and_names_path() {
        let err: ConnsyncError = ApplicationError::MissingSourceFile {
            path: PathBuf::from("/proj/element-templates/t.json"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.to_string().contains("/proj/element-templates/t.json"));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn absolute_offset_is_validation() {
        let err: ConnsyncError = DomainError::AbsolutePathNotAllowed { path: "/x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn filesystem_failure_is_internal() {
        let err: ConnsyncError = ApplicationError::FilesystemError {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
