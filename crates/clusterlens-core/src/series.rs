//! Read-only store of per-security price history.

use std::collections::HashMap;

use crate::{Symbol, TimeSeriesPoint};

/// Per-symbol adjusted-close history, sorted by date ascending.
///
/// A symbol with no recorded history yields an empty slice, not an error.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesStore {
    series: HashMap<Symbol, Vec<TimeSeriesPoint>>,
}

impl TimeSeriesStore {
    pub fn from_points(points: Vec<TimeSeriesPoint>) -> Self {
        let mut series: HashMap<Symbol, Vec<TimeSeriesPoint>> = HashMap::new();
        for point in points {
            series.entry(point.symbol.clone()).or_default().push(point);
        }

        for points in series.values_mut() {
            points.sort_by_key(|point| point.date);
        }

        Self { series }
    }

    pub fn series_for(&self, symbol: &Symbol) -> &[TimeSeriesPoint] {
        self.series
            .get(symbol)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn symbol_count(&self) -> usize {
        self.series.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradingDate;

    fn point(symbol: &str, date: &str, close: f64) -> TimeSeriesPoint {
        TimeSeriesPoint::new(
            Symbol::parse(symbol).expect("symbol"),
            TradingDate::parse(date).expect("date"),
            close,
        )
        .expect("point")
    }

    #[test]
    fn sorts_each_series_by_date() {
        let store = TimeSeriesStore::from_points(vec![
            point("AAPL", "2023-01-10", 130.0),
            point("AAPL", "2023-01-03", 125.0),
            point("AAPL", "2023-01-05", 127.0),
        ]);

        let symbol = Symbol::parse("AAPL").expect("symbol");
        let dates = store
            .series_for(&symbol)
            .iter()
            .map(|point| point.date.format_iso())
            .collect::<Vec<_>>();
        assert_eq!(dates, vec!["2023-01-03", "2023-01-05", "2023-01-10"]);
    }

    #[test]
    fn unknown_symbol_yields_empty_slice() {
        let store = TimeSeriesStore::from_points(vec![point("AAPL", "2023-01-03", 125.0)]);
        let symbol = Symbol::parse("XOM").expect("symbol");
        assert!(store.series_for(&symbol).is_empty());
    }
}
