//! CLI argument definitions for clusterlens.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Explore a pre-computed securities clustering from the command line.
///
/// Loads the static clustering and price-history snapshots, applies filter
/// and selection actions, and emits the render-ready view bundle.
#[derive(Debug, Parser)]
#[command(
    name = "clusterlens",
    author,
    version,
    about = "Securities cluster explorer"
)]
pub struct Cli {
    /// Path to the clustering snapshot (.parquet or .csv).
    #[arg(long, global = true, value_name = "PATH")]
    pub clusters: Option<PathBuf>,

    /// Path to the time-series snapshot (.parquet or .csv).
    ///
    /// Required by commands that render price history (`view`, `replay`).
    #[arg(long, global = true, value_name = "PATH")]
    pub series: Option<PathBuf>,

    /// Rendering preset for the scatter plot.
    #[arg(long, global = true, value_enum, default_value_t = PresetSelector::Cluster)]
    pub preset: PresetSelector,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Emit load diagnostics on stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// View configuration presets, one per legacy explorer variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetSelector {
    /// Color points by cluster id (default).
    Cluster,
    /// Color points by cluster-type label.
    ClusterType,
    /// Cluster-id coloring with the legend hidden.
    Legendless,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the sector filter options.
    ///
    /// Prints `All` followed by every distinct sector in the snapshot.
    Sectors,

    /// List the candidate securities for a sector/search combination.
    ///
    /// # Examples
    ///
    ///   clusterlens candidates --clusters data/clusters.parquet --search ap
    Candidates(CandidatesArgs),

    /// Build the view bundle for a filter/selection state.
    ///
    /// Applies the given sector, search, and selection to a fresh session
    /// and emits the resulting bundle; ignored actions become warnings.
    View(ViewArgs),

    /// Replay a JSON action script through one session.
    ///
    /// The script is a JSON array of actions, e.g.
    /// `[{"action":"set_sector","value":"Energy"}]`.
    Replay(ReplayArgs),
}

/// Arguments for the `candidates` command.
#[derive(Debug, Args)]
pub struct CandidatesArgs {
    /// Sector filter (`All` or a sector label).
    #[arg(long, default_value = "All")]
    pub sector: String,

    /// Search term matched case-insensitively against security names.
    #[arg(long, default_value = "")]
    pub search: String,
}

/// Arguments for the `view` command.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Sector filter (`All` or a sector label).
    #[arg(long)]
    pub sector: Option<String>,

    /// Search term matched case-insensitively against security names.
    #[arg(long)]
    pub search: Option<String>,

    /// Security to select from the resulting candidate list.
    #[arg(long)]
    pub select: Option<String>,
}

/// Arguments for the `replay` command.
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to the JSON action script.
    pub script: PathBuf,
}
