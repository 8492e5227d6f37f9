use serde::{Deserialize, Serialize};

use crate::{Symbol, TradingDate, ValidationError};

/// One row of the clustering snapshot.
///
/// Immutable for the session; the catalog owns the canonical row order these
/// records were loaded in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    pub symbol: Symbol,
    pub sector: String,
    pub cumulative_return: f64,
    pub annualized_volatility: f64,
    pub trend_indicator: f64,
    pub cluster: i64,
    pub cluster_type: String,
    pub avg_volume: f64,
}

impl SecurityRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: Symbol,
        sector: impl Into<String>,
        cumulative_return: f64,
        annualized_volatility: f64,
        trend_indicator: f64,
        cluster: i64,
        cluster_type: impl Into<String>,
        avg_volume: f64,
    ) -> Result<Self, ValidationError> {
        let sector = sector.into();
        if sector.trim().is_empty() {
            return Err(ValidationError::EmptySector);
        }

        validate_finite("cumulative_return", cumulative_return)?;
        validate_finite("annualized_volatility", annualized_volatility)?;
        validate_finite("trend_indicator", trend_indicator)?;
        validate_non_negative("avg_volume", avg_volume)?;

        Ok(Self {
            symbol,
            sector,
            cumulative_return,
            annualized_volatility,
            trend_indicator,
            cluster,
            cluster_type: cluster_type.into(),
            avg_volume,
        })
    }

    /// Label shown in the dropdown and matched by the search box.
    pub fn display_name(&self) -> &str {
        self.symbol.as_str()
    }
}

/// One adjusted-close observation for a security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub symbol: Symbol,
    pub date: TradingDate,
    pub adjusted_close: f64,
}

impl TimeSeriesPoint {
    pub fn new(
        symbol: Symbol,
        date: TradingDate,
        adjusted_close: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("adjusted_close", adjusted_close)?;

        Ok(Self {
            symbol,
            date,
            adjusted_close,
        })
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
