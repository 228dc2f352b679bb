//! Core domain layer for connsync.
//!
//! Pure path logic with no I/O. Filesystem access is handled via the
//! `Filesystem` port defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Paths are computed, never touched
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod entities;
pub mod error;

pub use entities::{
    DEFAULT_SOURCE, DEFAULT_TARGET, RelativePath, SyncLayout, project_root_of,
};

pub use error::{DomainError, ErrorCategory};
