//! Snapshot loading for clusterlens.
//!
//! The two input tables are static, read-only snapshots (Parquet or CSV),
//! read once per session through an in-memory DuckDB connection and
//! materialized into the core catalog/store types. Any schema problem here
//! is startup-fatal; after a successful load nothing in the system touches
//! the files again.

use std::path::Path;

use ::duckdb::Connection;
use ::duckdb::ToSql;
use thiserror::Error;
use tracing::info;

use clusterlens_core::{
    CatalogError, SecurityCatalog, SecurityRecord, Symbol, TimeSeriesPoint, TimeSeriesStore,
    TradingDate, ValidationError,
};

/// Table labels used in schema error messages.
const CLUSTER_TABLE: &str = "clusters";
const SERIES_TABLE: &str = "time_series";

const CLUSTER_REQUIRED: &[&str] = &[
    "Security",
    "GICS Sector",
    "Cumulative Return",
    "Annualized Volatility",
    "Trend Indicator",
    "Cluster",
    "Avg Volume",
];

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    DuckDb(#[from] ::duckdb::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{table} snapshot is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("unsupported snapshot format '{path}', expected .parquet or .csv")]
    UnsupportedFormat { path: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load the clustering snapshot into a session catalog.
///
/// Required columns: `Security`, `GICS Sector`, `Cumulative Return`,
/// `Annualized Volatility`, `Trend Indicator`, `Cluster`, `Avg Volume`.
/// `Cluster_Type` is optional; earlier snapshot variants predate it, and a
/// `Cluster {id}` label is synthesized in its place.
pub fn load_catalog(path: &Path) -> Result<SecurityCatalog, SnapshotError> {
    let connection = Connection::open_in_memory()?;
    let table = table_expression(path)?;

    let columns = list_columns(&connection, &table)?;
    require_columns(CLUSTER_TABLE, &columns, CLUSTER_REQUIRED)?;
    let has_cluster_type = has_column(&columns, "Cluster_Type");

    let cluster_type_expr = if has_cluster_type {
        r#""Cluster_Type""#
    } else {
        "CAST(NULL AS VARCHAR)"
    };
    let sql = format!(
        r#"
SELECT
    "Security",
    "GICS Sector",
    "Cumulative Return",
    "Annualized Volatility",
    "Trend Indicator",
    CAST("Cluster" AS BIGINT),
    {cluster_type_expr},
    "Avg Volume"
FROM {table}
"#
    );

    let mut statement = connection.prepare(&sql)?;
    let mut rows = statement.query([] as [&dyn ToSql; 0])?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        let symbol: String = row.get(0)?;
        let sector: String = row.get(1)?;
        let cumulative_return: f64 = row.get(2)?;
        let annualized_volatility: f64 = row.get(3)?;
        let trend_indicator: f64 = row.get(4)?;
        let cluster: i64 = row.get(5)?;
        let cluster_type: Option<String> = row.get(6)?;
        let avg_volume: f64 = row.get(7)?;

        records.push(SecurityRecord::new(
            Symbol::parse(&symbol)?,
            sector,
            cumulative_return,
            annualized_volatility,
            trend_indicator,
            cluster,
            cluster_type.unwrap_or_else(|| format!("Cluster {cluster}")),
            avg_volume,
        )?);
    }

    let catalog = SecurityCatalog::from_records(records)?;
    info!(
        rows = catalog.len(),
        sectors = catalog.sector_options().len() - 1,
        "loaded cluster snapshot"
    );
    Ok(catalog)
}

/// Load the per-security price history snapshot.
///
/// Required columns: `Security`, `Date`, and `Adj Close` (one snapshot
/// variant renames it to `Close`; both are accepted and exposed uniformly
/// as adjusted close).
pub fn load_time_series(path: &Path) -> Result<TimeSeriesStore, SnapshotError> {
    let connection = Connection::open_in_memory()?;
    let table = table_expression(path)?;

    let columns = list_columns(&connection, &table)?;
    require_columns(SERIES_TABLE, &columns, &["Security", "Date"])?;
    let close_column = if has_column(&columns, "Adj Close") {
        "Adj Close"
    } else if has_column(&columns, "Close") {
        "Close"
    } else {
        return Err(SnapshotError::MissingColumn {
            table: SERIES_TABLE.to_owned(),
            column: String::from("Adj Close"),
        });
    };

    let sql = format!(
        r#"
SELECT
    "Security",
    CAST(CAST("Date" AS DATE) AS VARCHAR),
    "{close_column}"
FROM {table}
"#
    );

    let mut statement = connection.prepare(&sql)?;
    let mut rows = statement.query([] as [&dyn ToSql; 0])?;
    let mut points = Vec::new();
    while let Some(row) = rows.next()? {
        let symbol: String = row.get(0)?;
        let date: String = row.get(1)?;
        let adjusted_close: f64 = row.get(2)?;

        points.push(TimeSeriesPoint::new(
            Symbol::parse(&symbol)?,
            TradingDate::parse(&date)?,
            adjusted_close,
        )?);
    }

    let store = TimeSeriesStore::from_points(points);
    info!(
        symbols = store.symbol_count(),
        close_column, "loaded time-series snapshot"
    );
    Ok(store)
}

/// DuckDB reader expression for a snapshot file, chosen by extension.
fn table_expression(path: &Path) -> Result<String, SnapshotError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let quoted = escape_sql_string(&path_to_sql(path));

    match extension.as_str() {
        "parquet" => Ok(format!("read_parquet('{quoted}')")),
        "csv" => Ok(format!("read_csv_auto('{quoted}', header=true)")),
        _ => Err(SnapshotError::UnsupportedFormat {
            path: path.to_string_lossy().into_owned(),
        }),
    }
}

/// Column names of a reader expression, via prepared-statement metadata.
fn list_columns(connection: &Connection, table: &str) -> Result<Vec<String>, SnapshotError> {
    let sql = format!("SELECT * FROM {table} LIMIT 0");
    let mut statement = connection.prepare(&sql)?;
    let _ = statement.query([] as [&dyn ToSql; 0])?;

    let column_count = statement.column_count();
    let mut columns = Vec::with_capacity(column_count);
    for index in 0..column_count {
        columns.push(statement.column_name(index).unwrap().to_string());
    }
    Ok(columns)
}

fn require_columns(
    table: &str,
    columns: &[String],
    required: &[&str],
) -> Result<(), SnapshotError> {
    for &column in required {
        if !has_column(columns, column) {
            return Err(SnapshotError::MissingColumn {
                table: table.to_owned(),
                column: column.to_owned(),
            });
        }
    }
    Ok(())
}

fn has_column(columns: &[String], name: &str) -> bool {
    columns.iter().any(|column| column == name)
}

fn path_to_sql(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}
