//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use connsync_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ConnsyncError, ConnsyncResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ConnsyncResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ConnsyncResult<u64> {
        trace!(from = %from.display(), to = %to.display(), "std::fs::copy");
        // std::fs::copy truncates an existing target and closes both handles on return.
        std::fs::copy(from, to).map_err(|e| map_io_error(to, e, "copy file"))
    }

    fn read(&self, path: &Path) -> ConnsyncResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ConnsyncError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
