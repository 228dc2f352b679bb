pub mod common;
pub mod layout;

pub use common::RelativePath;
pub use layout::{DEFAULT_SOURCE, DEFAULT_TARGET, SyncLayout, project_root_of};
