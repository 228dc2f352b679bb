//! Application layer for connsync.
//!
//! This layer contains:
//! - **Services**: `SyncService`, the sync and check use cases
//! - **Ports**: the `Filesystem` trait
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{SyncReport, SyncService, SyncStatus};

pub use ports::Filesystem;

pub use error::ApplicationError;
