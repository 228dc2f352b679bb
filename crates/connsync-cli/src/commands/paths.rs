//! `connsync paths` — show where the template is read from and written to.

use crate::{
    cli::GlobalArgs, commands, config::AppConfig, error::CliResult, output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let layout = commands::resolve_layout(&global, &config)?;

    if output.is_json() {
        output.json(&layout)?;
        return Ok(());
    }

    output.field("root", &layout.root().display().to_string())?;
    output.field("source", &layout.source().display().to_string())?;
    output.field("target", &layout.target().display().to_string())?;
    Ok(())
}
