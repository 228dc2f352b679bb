//! Subcommand handlers.
//!
//! Each handler translates CLI state into core calls and renders the result.
//! No business logic lives here.

pub mod check;
pub mod completions;
pub mod paths;
pub mod sync;

use std::path::PathBuf;

use tracing::debug;

use connsync_adapters::LocalFilesystem;
use connsync_core::{
    application::SyncService,
    domain::{SyncLayout, project_root_of},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the layout for this run.
///
/// Root precedence: `--project-root`, then `layout.project_root` from
/// config/env, then the grandparent of the running executable.
pub fn resolve_layout(global: &GlobalArgs, config: &AppConfig) -> CliResult<SyncLayout> {
    let root = match global
        .project_root
        .clone()
        .or_else(|| config.project_root().map(PathBuf::from))
    {
        Some(root) => root,
        None => executable_root()?,
    };
    debug!(root = %root.display(), "Project root resolved");

    SyncLayout::with_offsets(root, &config.layout.source, &config.layout.target)
        .map_err(|e| CliError::Core(e.into()))
}

/// Project root derived from the running executable's real location.
fn executable_root() -> CliResult<PathBuf> {
    let exe = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|source| CliError::ExecutableNotFound { source })?;
    debug!(executable = %exe.display(), "Located executable");

    project_root_of(&exe).map_err(|e| CliError::Core(e.into()))
}

/// Service wired to the real filesystem.
pub fn local_service() -> SyncService {
    SyncService::new(Box::new(LocalFilesystem::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::path::Path;

    fn args(project_root: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            project_root: project_root.map(PathBuf::from),
        }
    }

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.layout.project_root = Some(PathBuf::from("/from-config"));

        let layout = resolve_layout(&args(Some("/from-flag")), &config).unwrap();
        assert_eq!(layout.root(), Path::new("/from-flag"));
    }

    #[test]
    fn config_root_used_without_flag() {
        let mut config = AppConfig::default();
        config.layout.project_root = Some(PathBuf::from("/from-config"));

        let layout = resolve_layout(&args(None), &config).unwrap();
        assert_eq!(
            layout.target(),
            Path::new("/from-config/connectors/telegram-connector.json")
        );
    }

    #[test]
    fn executable_root_is_grandparent_of_test_binary() {
        let layout = resolve_layout(&args(None), &AppConfig::default()).unwrap();
        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(Some(layout.root()), exe.parent().and_then(Path::parent));
    }

    #[test]
    fn absolute_offset_in_config_is_rejected() {
        let mut config = AppConfig::default();
        config.layout.target = PathBuf::from("/etc/connector.json");

        let err = resolve_layout(&args(Some("/proj")), &config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
