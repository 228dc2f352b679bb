//! Driven (output) ports - implemented by infrastructure.
//!
//! The `connsync-adapters` crate provides implementations.

use crate::error::ConnsyncResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `connsync_adapters::filesystem::LocalFilesystem` (production)
/// - `connsync_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ConnsyncResult<()>;

    /// Copy the bytes of `from` to `to`, replacing `to` if present.
    ///
    /// Returns the number of bytes copied. The parent of `to` must exist.
    fn copy_file(&self, from: &Path, to: &Path) -> ConnsyncResult<u64>;

    /// Read a file's full contents.
    fn read(&self, path: &Path) -> ConnsyncResult<Vec<u8>>;
}
