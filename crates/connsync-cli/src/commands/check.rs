//! `connsync check` — compare source and target without writing.

use serde::Serialize;

use connsync_core::application::SyncStatus;

use crate::{
    cli::GlobalArgs,
    commands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct CheckReport<'a> {
    target: &'a std::path::Path,
    status: SyncStatus,
}

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layout = commands::resolve_layout(&global, &config)?;
    let status = commands::local_service().check(&layout)?;

    if output.is_json() {
        output.json(&CheckReport {
            target: layout.target(),
            status,
        })?;
    } else if status.is_up_to_date() {
        output.success(&format!("{} is up to date", layout.target().display()))?;
    } else {
        output.warning(&format!("{} is {status}", layout.target().display()))?;
    }

    if status.is_up_to_date() {
        Ok(())
    } else {
        Err(CliError::OutOfSync {
            target: layout.target().to_path_buf(),
            status,
        })
    }
}
