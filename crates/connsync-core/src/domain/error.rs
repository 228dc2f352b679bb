// ============================================================================
// domain/error.rs - LAYOUT ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Layout path must not be empty: {field}")]
    EmptyLayoutPath { field: &'static str },

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    #[error("Cannot derive project root from executable at {}", executable.display())]
    ProjectRootUnresolvable { executable: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
                "Example: element-templates/telegram-outbound-connector.json".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("Remove the '..' segments from '{}'", path),
                "Layout paths must stay inside the project root".into(),
            ],
            Self::EmptyLayoutPath { field } => vec![
                format!("Set a non-empty value for layout.{}", field),
                "Or remove the key to fall back to the default".into(),
            ],
            Self::ProjectRootUnresolvable { executable } => vec![
                format!(
                    "'{}' has no grandparent directory",
                    executable.display()
                ),
                "Install the binary under <project>/scripts/".into(),
                "Or pass --project-root explicitly".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::EmptyLayoutPath { .. } => ErrorCategory::Validation,
            Self::ProjectRootUnresolvable { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
