use clusterlens_core::{Action, SectorFilter, Session};

use crate::cli::{Cli, ViewArgs};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ViewArgs, cli: &Cli) -> Result<CommandResult, CliError> {
    let catalog = clusterlens_data::load_catalog(super::clusters_path(cli)?)?;
    let store = clusterlens_data::load_time_series(super::series_path(cli)?)?;
    let mut session = Session::new(catalog, store, super::view_config(cli));

    let mut actions = Vec::new();
    if let Some(sector) = &args.sector {
        actions.push(Action::SetSector(SectorFilter::parse(sector)));
    }
    if let Some(search) = &args.search {
        actions.push(Action::SetSearchTerm(search.clone()));
    }
    if let Some(select) = &args.select {
        actions.push(Action::SelectFromCandidates(select.clone()));
    }

    let mut warnings = Vec::new();
    let mut bundle = session.view();
    for action in &actions {
        let (next, rejected) = session.apply(action);
        bundle = next;
        if let Some(rejection) = rejected {
            warnings.push(format!("action ignored: {rejection}"));
        }
    }

    Ok(CommandResult::ok(serde_json::to_value(bundle)?).with_warnings(warnings))
}
