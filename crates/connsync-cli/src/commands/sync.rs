//! `connsync` / `connsync sync` — copy the template into place.

use tracing::{info, instrument};

use crate::{
    cli::GlobalArgs, commands, config::AppConfig, error::CliResult, output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layout = commands::resolve_layout(&global, &config)?;
    let report = commands::local_service().sync(&layout)?;

    info!(
        target_path = %report.target.display(),
        bytes = report.bytes_copied,
        "Sync finished"
    );

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    let verb = if report.overwritten { "Updated" } else { "Created" };
    output.success(&format!(
        "{verb} {} ({} bytes)",
        report.target.display(),
        report.bytes_copied
    ))?;

    Ok(())
}
