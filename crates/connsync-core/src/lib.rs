//! connsync core - ports and adapters for the connector template sync.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          connsync-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      SyncService (sync / check)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Filesystem port (trait)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  connsync-adapters (Local / Memory fs)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use connsync_core::prelude::*;
//! # fn demo(filesystem: Box<dyn Filesystem>) -> ConnsyncResult<()> {
//! let layout = SyncLayout::from_executable("/proj/scripts/connsync".as_ref())?;
//! let service = SyncService::new(filesystem);
//! service.sync(&layout)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{Filesystem, SyncReport, SyncService, SyncStatus};
    pub use crate::domain::{DEFAULT_SOURCE, DEFAULT_TARGET, SyncLayout};
    pub use crate::error::{ConnsyncError, ConnsyncResult};
}

