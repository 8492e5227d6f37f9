//! Behavior tests for snapshot loading.
//!
//! Fixtures are written through DuckDB `COPY ... (FORMAT PARQUET)` or as
//! plain CSV, matching the two accepted snapshot formats.

use std::fs;
use std::path::Path;

use duckdb::Connection;
use tempfile::tempdir;

use clusterlens_data::{load_catalog, load_time_series, SnapshotError};
use clusterlens_tests::symbol;

fn write_parquet(path: &Path, select_sql: &str) {
    let connection = Connection::open_in_memory().expect("connection");
    let escaped = path.to_string_lossy().replace('\'', "''");
    connection
        .execute_batch(&format!(
            "COPY ({select_sql}) TO '{escaped}' (FORMAT PARQUET)"
        ))
        .expect("write parquet fixture");
}

const CLUSTER_SELECT: &str = "\
SELECT 'AAPL' AS \"Security\", 'Information Technology' AS \"GICS Sector\", \
0.42 AS \"Cumulative Return\", 0.18 AS \"Annualized Volatility\", \
1.05 AS \"Trend Indicator\", 2 AS \"Cluster\", 'Growth' AS \"Cluster_Type\", \
75000000.0 AS \"Avg Volume\" \
UNION ALL \
SELECT 'XOM', 'Energy', 0.12, 0.25, 0.40, 1, 'Value', 32000000.0";

#[test]
fn loads_parquet_cluster_snapshot() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("clusters.parquet");
    write_parquet(&path, CLUSTER_SELECT);

    let catalog = load_catalog(&path).expect("load should succeed");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.sector_options(),
        vec!["All", "Energy", "Information Technology"]
    );

    let aapl = catalog.by_symbol(&symbol("AAPL")).expect("AAPL present");
    assert_eq!(aapl.cluster, 2);
    assert_eq!(aapl.cluster_type, "Growth");
}

#[test]
fn loads_parquet_time_series_with_adj_close() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("series.parquet");
    write_parquet(
        &path,
        "SELECT 'AAPL' AS \"Security\", DATE '2023-01-04' AS \"Date\", 126.36 AS \"Adj Close\" \
         UNION ALL SELECT 'AAPL', DATE '2023-01-03', 125.07",
    );

    let store = load_time_series(&path).expect("load should succeed");
    let series = store.series_for(&symbol("AAPL"));
    assert_eq!(series.len(), 2);
    // Sorted by date regardless of snapshot row order.
    assert_eq!(series[0].date.format_iso(), "2023-01-03");
    assert_eq!(series[0].adjusted_close, 125.07);
}

#[test]
fn close_column_is_accepted_as_alias() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("series.csv");
    fs::write(
        &path,
        "Security,Date,Close\nXOM,2023-01-03,110.51\nXOM,2023-01-04,109.87\n",
    )
    .expect("write fixture");

    let store = load_time_series(&path).expect("load should succeed");
    assert_eq!(store.series_for(&symbol("XOM")).len(), 2);
}

#[test]
fn missing_required_cluster_column_is_startup_fatal() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("clusters.parquet");
    write_parquet(
        &path,
        "SELECT 'AAPL' AS \"Security\", 'Energy' AS \"GICS Sector\", 0.1 AS \"Cumulative Return\"",
    );

    let error = load_catalog(&path).expect_err("must fail before any interaction");
    assert!(matches!(
        error,
        SnapshotError::MissingColumn { ref column, .. } if column == "Annualized Volatility"
    ));
}

#[test]
fn missing_close_column_is_startup_fatal() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("series.csv");
    fs::write(&path, "Security,Date,Volume\nAAPL,2023-01-03,100\n").expect("write fixture");

    let error = load_time_series(&path).expect_err("must fail");
    assert!(matches!(
        error,
        SnapshotError::MissingColumn { ref column, .. } if column == "Adj Close"
    ));
}

#[test]
fn cluster_type_fallback_label_is_synthesized() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("clusters.parquet");
    write_parquet(
        &path,
        "SELECT 'AAPL' AS \"Security\", 'Energy' AS \"GICS Sector\", \
         0.42 AS \"Cumulative Return\", 0.18 AS \"Annualized Volatility\", \
         1.05 AS \"Trend Indicator\", 3 AS \"Cluster\", 75000000.0 AS \"Avg Volume\"",
    );

    let catalog = load_catalog(&path).expect("load should succeed");
    assert_eq!(catalog.records()[0].cluster_type, "Cluster 3");
}

#[test]
fn duplicate_symbols_are_rejected_at_load() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("clusters.csv");
    fs::write(
        &path,
        "\
Security,GICS Sector,Cumulative Return,Annualized Volatility,Trend Indicator,Cluster,Avg Volume
AAPL,Energy,0.1,0.2,0.3,1,100
AAPL,Energy,0.4,0.5,0.6,2,200
",
    )
    .expect("write fixture");

    let error = load_catalog(&path).expect_err("must fail");
    assert!(matches!(error, SnapshotError::Catalog(_)));
}

#[test]
fn feather_snapshots_are_rejected_with_a_clear_error() {
    let error = load_catalog(Path::new("clusters.feather")).expect_err("must fail");
    assert!(matches!(error, SnapshotError::UnsupportedFormat { .. }));
}
