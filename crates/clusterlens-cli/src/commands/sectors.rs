use serde::Serialize;

use crate::cli::Cli;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SectorsData {
    sectors: Vec<String>,
}

pub fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let catalog = clusterlens_data::load_catalog(super::clusters_path(cli)?)?;

    let data = serde_json::to_value(SectorsData {
        sectors: catalog.sector_options(),
    })?;

    Ok(CommandResult::ok(data))
}
