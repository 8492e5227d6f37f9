use std::fs;

use clusterlens_core::{Action, Session};

use crate::cli::{Cli, ReplayArgs};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ReplayArgs, cli: &Cli) -> Result<CommandResult, CliError> {
    let script = fs::read_to_string(&args.script)?;
    let actions: Vec<Action> = serde_json::from_str(&script)?;

    let catalog = clusterlens_data::load_catalog(super::clusters_path(cli)?)?;
    let store = clusterlens_data::load_time_series(super::series_path(cli)?)?;
    let mut session = Session::new(catalog, store, super::view_config(cli));

    let mut warnings = Vec::new();
    let mut bundle = session.view();
    for (position, action) in actions.iter().enumerate() {
        let (next, rejected) = session.apply(action);
        bundle = next;
        if let Some(rejection) = rejected {
            warnings.push(format!("action {position} ignored: {rejection}"));
        }
    }

    Ok(CommandResult::ok(serde_json::to_value(bundle)?).with_warnings(warnings))
}
