//! Derived views: pure projection of (catalog, series store, state) into a
//! render-ready bundle.
//!
//! The legacy explorer shipped as several near-duplicate scripts that
//! differed only in color scheme, legend visibility, and highlight marker;
//! those differences are a [`ViewConfig`] here, not separate code paths.

use serde::{Deserialize, Serialize};

use crate::{FilterState, SecurityCatalog, SecurityRecord, TimeSeriesStore};

/// Axis labels of the 3D scatter plot. Fixed for every view.
pub const SCATTER_AXES: PlotAxes = PlotAxes {
    x: "Cumulative Return",
    y: "Annualized Volatility",
    z: "Trend Indicator",
};

/// Which record field drives point coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorDimension {
    Cluster,
    ClusterType,
}

impl ColorDimension {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cluster => "cluster",
            Self::ClusterType => "cluster_type",
        }
    }

    fn color_key(self, record: &SecurityRecord) -> String {
        match self {
            Self::Cluster => record.cluster.to_string(),
            Self::ClusterType => record.cluster_type.clone(),
        }
    }
}

/// Marker shape of the selection overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightStyle {
    Diamond,
    Ring,
    Cross,
}

impl HighlightStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diamond => "diamond",
            Self::Ring => "ring",
            Self::Cross => "cross",
        }
    }
}

/// Rendering configuration. Presets replace the legacy script variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub color_dimension: ColorDimension,
    pub opacity: f64,
    pub show_legend: bool,
    pub highlight: HighlightStyle,
}

impl ViewConfig {
    /// Color by cluster-type label instead of cluster id.
    pub fn cluster_type() -> Self {
        Self {
            color_dimension: ColorDimension::ClusterType,
            ..Self::DEFAULT
        }
    }

    /// Legend hidden, as in the compact legacy variant.
    pub fn legendless() -> Self {
        Self {
            show_legend: false,
            ..Self::DEFAULT
        }
    }

    const DEFAULT: Self = Self {
        color_dimension: ColorDimension::Cluster,
        opacity: 0.8,
        show_legend: true,
        highlight: HighlightStyle::Diamond,
    };
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotAxes {
    pub x: &'static str,
    pub y: &'static str,
    pub z: &'static str,
}

/// One catalog record as a plotted point. The full population is always
/// plotted; selection is the `highlighted` flag, never a subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color_key: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub axes: PlotAxes,
    pub color_dimension: ColorDimension,
    pub opacity: f64,
    pub show_legend: bool,
    pub points: Vec<PlotPoint>,
}

/// Overlay trace marking the selected security.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightOverlay {
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub marker: &'static str,
    pub hover_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub adjusted_close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesSpec {
    pub title: String,
    pub no_selection: bool,
    pub points: Vec<SeriesPoint>,
}

/// Metric snapshot for the selected security. Numerics carry exactly two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub symbol: String,
    pub cumulative_return: String,
    pub annualized_volatility: String,
    pub trend_indicator: String,
    pub avg_volume: String,
    pub cluster: String,
    pub cluster_type: String,
    pub sector: String,
}

/// Candidate list for the dropdown, with an explicit no-results signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateList {
    pub symbols: Vec<String>,
    pub no_results: bool,
}

/// Complete, deterministic output for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewBundle {
    pub scatter: ScatterSpec,
    pub highlight: Option<HighlightOverlay>,
    pub time_series: TimeSeriesSpec,
    pub metrics: Option<MetricSnapshot>,
    pub candidates: CandidateList,
}

/// Build the view bundle for a state.
///
/// Pure: the same (catalog, store, state, config) always yields a value-equal
/// bundle, so it is safe to recompute on every interaction.
pub fn build(
    catalog: &SecurityCatalog,
    store: &TimeSeriesStore,
    state: &FilterState,
    config: &ViewConfig,
) -> ViewBundle {
    // The resolver only ever sets catalog keys, so this lookup succeeds for
    // any state it produced; an untrusted state degrades to the no-selection
    // bundle instead of failing.
    let selected = state
        .selected()
        .and_then(|symbol| catalog.by_symbol(symbol).ok());

    let points = catalog
        .records()
        .iter()
        .map(|record| PlotPoint {
            symbol: record.symbol.to_string(),
            x: record.cumulative_return,
            y: record.annualized_volatility,
            z: record.trend_indicator,
            color_key: config.color_dimension.color_key(record),
            highlighted: selected.is_some_and(|chosen| chosen.symbol == record.symbol),
        })
        .collect();

    let scatter = ScatterSpec {
        axes: SCATTER_AXES,
        color_dimension: config.color_dimension,
        opacity: config.opacity,
        show_legend: config.show_legend,
        points,
    };

    let highlight = selected.map(|record| HighlightOverlay {
        symbol: record.symbol.to_string(),
        x: record.cumulative_return,
        y: record.annualized_volatility,
        z: record.trend_indicator,
        marker: config.highlight.as_str(),
        hover_label: hover_label(record),
    });

    let time_series = match selected {
        Some(record) => TimeSeriesSpec {
            title: format!("Price History for {}", record.symbol),
            no_selection: false,
            points: store
                .series_for(&record.symbol)
                .iter()
                .map(|point| SeriesPoint {
                    date: point.date.format_iso(),
                    adjusted_close: point.adjusted_close,
                })
                .collect(),
        },
        None => TimeSeriesSpec {
            title: String::from("Select a security to view its price history"),
            no_selection: true,
            points: Vec::new(),
        },
    };

    let metrics = selected.map(|record| MetricSnapshot {
        symbol: record.symbol.to_string(),
        cumulative_return: format_metric(record.cumulative_return),
        annualized_volatility: format_metric(record.annualized_volatility),
        trend_indicator: format_metric(record.trend_indicator),
        avg_volume: format_metric(record.avg_volume),
        cluster: record.cluster.to_string(),
        cluster_type: record.cluster_type.clone(),
        sector: record.sector.clone(),
    });

    let symbols = catalog
        .filter(state.sector(), state.search_term())
        .iter()
        .map(|record| record.symbol.to_string())
        .collect::<Vec<_>>();
    let candidates = CandidateList {
        no_results: symbols.is_empty(),
        symbols,
    };

    ViewBundle {
        scatter,
        highlight,
        time_series,
        metrics,
        candidates,
    }
}

fn hover_label(record: &SecurityRecord) -> String {
    format!(
        "{} ({}) ret {:.2} vol {:.2} trend {:.2}",
        record.symbol, record.cluster_type, record.cumulative_return,
        record.annualized_volatility, record.trend_indicator,
    )
}

fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolver, Action, Symbol, SecurityRecord};

    fn record(symbol: &str, sector: &str, cumulative_return: f64) -> SecurityRecord {
        SecurityRecord::new(
            Symbol::parse(symbol).expect("symbol"),
            sector,
            cumulative_return,
            0.18456,
            1.049,
            2,
            "Momentum",
            50_000_000.0,
        )
        .expect("record")
    }

    fn catalog() -> SecurityCatalog {
        SecurityCatalog::from_records(vec![
            record("AAPL", "Information Technology", 0.42119),
            record("XOM", "Energy", 0.12),
        ])
        .expect("catalog")
    }

    fn select(catalog: &SecurityCatalog, symbol: &str) -> FilterState {
        resolver::resolve(
            &FilterState::initial(),
            &Action::SelectFromCandidates(String::from(symbol)),
            catalog,
        )
        .state
    }

    #[test]
    fn no_selection_bundle_has_marker_and_no_overlay() {
        let catalog = catalog();
        let bundle = build(
            &catalog,
            &TimeSeriesStore::default(),
            &FilterState::initial(),
            &ViewConfig::default(),
        );

        assert!(bundle.highlight.is_none());
        assert!(bundle.metrics.is_none());
        assert!(bundle.time_series.no_selection);
        assert!(bundle.time_series.points.is_empty());
        assert_eq!(bundle.scatter.points.len(), 2);
        assert!(bundle.scatter.points.iter().all(|point| !point.highlighted));
    }

    #[test]
    fn selection_highlights_exactly_one_point_of_full_population() {
        let catalog = catalog();
        let state = select(&catalog, "XOM");
        let bundle = build(
            &catalog,
            &TimeSeriesStore::default(),
            &state,
            &ViewConfig::default(),
        );

        assert_eq!(bundle.scatter.points.len(), 2, "overlay, not subset");
        let highlighted = bundle
            .scatter
            .points
            .iter()
            .filter(|point| point.highlighted)
            .collect::<Vec<_>>();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].symbol, "XOM");

        let overlay = bundle.highlight.expect("overlay");
        assert_eq!(overlay.symbol, "XOM");
        assert!(overlay.hover_label.contains("Momentum"));
    }

    #[test]
    fn metrics_are_formatted_to_two_decimals() {
        let catalog = catalog();
        let state = select(&catalog, "AAPL");
        let bundle = build(
            &catalog,
            &TimeSeriesStore::default(),
            &state,
            &ViewConfig::default(),
        );

        let metrics = bundle.metrics.expect("metrics");
        assert_eq!(metrics.cumulative_return, "0.42");
        assert_eq!(metrics.annualized_volatility, "0.18");
        assert_eq!(metrics.trend_indicator, "1.05");
        assert_eq!(metrics.avg_volume, "50000000.00");
        assert_eq!(metrics.sector, "Information Technology");
        assert_eq!(metrics.cluster, "2");
    }

    #[test]
    fn color_key_follows_config_dimension() {
        let catalog = catalog();
        let by_id = build(
            &catalog,
            &TimeSeriesStore::default(),
            &FilterState::initial(),
            &ViewConfig::default(),
        );
        assert_eq!(by_id.scatter.points[0].color_key, "2");

        let by_type = build(
            &catalog,
            &TimeSeriesStore::default(),
            &FilterState::initial(),
            &ViewConfig::cluster_type(),
        );
        assert_eq!(by_type.scatter.points[0].color_key, "Momentum");
    }

    #[test]
    fn empty_candidates_signal_is_explicit() {
        let catalog = catalog();
        let state = resolver::resolve(
            &FilterState::initial(),
            &Action::SetSearchTerm(String::from("zzz")),
            &catalog,
        )
        .state;
        let bundle = build(
            &catalog,
            &TimeSeriesStore::default(),
            &state,
            &ViewConfig::default(),
        );
        assert!(bundle.candidates.no_results);
        assert!(bundle.candidates.symbols.is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let catalog = catalog();
        let state = select(&catalog, "AAPL");
        let store = TimeSeriesStore::default();
        let config = ViewConfig::default();
        assert_eq!(
            build(&catalog, &store, &state, &config),
            build(&catalog, &store, &state, &config)
        );
    }
}
