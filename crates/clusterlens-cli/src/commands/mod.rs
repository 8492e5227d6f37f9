mod candidates;
mod replay;
mod sectors;
mod view;

use std::path::Path;

use serde_json::Value;
use uuid::Uuid;

use clusterlens_core::ViewConfig;

use crate::cli::{Cli, Command, PresetSelector};
use crate::error::CliError;
use crate::output::{Response, ResponseMeta};

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Response, CliError> {
    let command_result = match &cli.command {
        Command::Sectors => sectors::run(cli)?,
        Command::Candidates(args) => candidates::run(args, cli)?,
        Command::View(args) => view::run(args, cli)?,
        Command::Replay(args) => replay::run(args, cli)?,
    };

    let CommandResult { data, warnings } = command_result;

    Ok(Response {
        meta: ResponseMeta {
            request_id: Uuid::new_v4().to_string(),
            warnings,
        },
        data,
    })
}

pub(crate) fn clusters_path(cli: &Cli) -> Result<&Path, CliError> {
    cli.clusters
        .as_deref()
        .ok_or_else(|| CliError::Command(String::from("--clusters is required")))
}

pub(crate) fn series_path(cli: &Cli) -> Result<&Path, CliError> {
    cli.series
        .as_deref()
        .ok_or_else(|| CliError::Command(String::from("--series is required for this command")))
}

pub(crate) fn view_config(cli: &Cli) -> ViewConfig {
    match cli.preset {
        PresetSelector::Cluster => ViewConfig::default(),
        PresetSelector::ClusterType => ViewConfig::cluster_type(),
        PresetSelector::Legendless => ViewConfig::legendless(),
    }
}
