//! Where the connector template lives and where it is synced to.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::common::RelativePath;
use crate::domain::DomainError;

/// Source template, relative to the project root.
pub const DEFAULT_SOURCE: &str = "element-templates/telegram-outbound-connector.json";

/// Sync destination, relative to the project root.
pub const DEFAULT_TARGET: &str = "connectors/telegram-connector.json";

/// Resolved, immutable layout for a single sync run.
///
/// All three paths are anchored at the same project root. Construct with
/// [`SyncLayout::from_executable`] for the normal case or
/// [`SyncLayout::at_root`] when the root is known up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncLayout {
    root: PathBuf,
    source: PathBuf,
    target: PathBuf,
}

impl SyncLayout {
    /// Layout with the default offsets under `root`.
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source: root.join(DEFAULT_SOURCE),
            target: root.join(DEFAULT_TARGET),
            root,
        }
    }

    /// Layout with custom offsets under `root`.
    ///
    /// Both offsets must be non-empty relative paths.
    pub fn with_offsets(
        root: impl Into<PathBuf>,
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let root = root.into();
        let source = RelativePath::try_new("source", source)?;
        let target = RelativePath::try_new("target", target)?;
        Ok(Self {
            source: source.resolve_under(&root),
            target: target.resolve_under(&root),
            root,
        })
    }

    /// Layout anchored at the grandparent of `executable`.
    ///
    /// `executable` should already be absolute and symlink-free; see
    /// [`project_root_of`].
    pub fn from_executable(executable: &Path) -> Result<Self, DomainError> {
        project_root_of(executable).map(Self::at_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Directory that must exist before the target can be written.
    pub fn target_dir(&self) -> Option<&Path> {
        self.target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Project root for an executable: the parent of the directory containing it.
pub fn project_root_of(executable: &Path) -> Result<PathBuf, DomainError> {
    executable
        .parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| DomainError::ProjectRootUnresolvable {
            executable: executable.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_grandparent_of_executable() {
        let root = project_root_of(Path::new("/proj/scripts/connsync")).unwrap();
        assert_eq!(root, PathBuf::from("/proj"));
    }

    #[test]
    fn executable_without_grandparent_is_rejected() {
        let err = project_root_of(Path::new("connsync")).unwrap_err();
        assert!(matches!(err, DomainError::ProjectRootUnresolvable { .. }));

        let err = project_root_of(Path::new("scripts/connsync")).unwrap_err();
        assert!(matches!(err, DomainError::ProjectRootUnresolvable { .. }));
    }

    #[test]
    fn default_layout_paths() {
        let layout = SyncLayout::from_executable(Path::new("/proj/scripts/connsync")).unwrap();
        assert_eq!(layout.root(), Path::new("/proj"));
        assert_eq!(
            layout.source(),
            Path::new("/proj/element-templates/telegram-outbound-connector.json")
        );
        assert_eq!(
            layout.target(),
            Path::new("/proj/connectors/telegram-connector.json")
        );
        assert_eq!(layout.target_dir(), Some(Path::new("/proj/connectors")));
    }

    #[test]
    fn custom_offsets_are_anchored() {
        let layout = SyncLayout::with_offsets("/proj", "in/t.json", "out/deep/t.json").unwrap();
        assert_eq!(layout.source(), Path::new("/proj/in/t.json"));
        assert_eq!(layout.target(), Path::new("/proj/out/deep/t.json"));
    }

    #[test]
    fn custom_offsets_reject_absolute() {
        assert!(SyncLayout::with_offsets("/proj", "/abs.json", "out.json").is_err());
        assert!(SyncLayout::with_offsets("/proj", "in.json", "/abs.json").is_err());
    }
}
