//! Infrastructure adapters for connsync.
//!
//! This crate implements the ports defined in `connsync-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
