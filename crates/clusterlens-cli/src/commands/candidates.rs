use serde::Serialize;

use clusterlens_core::SectorFilter;

use crate::cli::{CandidatesArgs, Cli};
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CandidatesData {
    sector: String,
    search: String,
    symbols: Vec<String>,
    no_results: bool,
}

pub fn run(args: &CandidatesArgs, cli: &Cli) -> Result<CommandResult, CliError> {
    let catalog = clusterlens_data::load_catalog(super::clusters_path(cli)?)?;

    let sector = SectorFilter::parse(&args.sector);
    if let SectorFilter::Named(name) = &sector {
        if !catalog.contains_sector(name) {
            return Err(CliError::Command(format!(
                "unknown sector '{name}'; run `clusterlens sectors` for the valid options"
            )));
        }
    }

    let symbols = catalog
        .filter(&sector, &args.search)
        .iter()
        .map(|record| record.symbol.to_string())
        .collect::<Vec<_>>();

    let data = serde_json::to_value(CandidatesData {
        sector: sector.to_string(),
        search: args.search.clone(),
        no_results: symbols.is_empty(),
        symbols,
    })?;

    Ok(CommandResult::ok(data))
}
