//! Core state model for interactive cluster exploration.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Read-only catalog and time-series stores
//! - The filter/selection state machine and action resolver
//! - The pure derived-view builder and session shell

pub mod catalog;
pub mod domain;
pub mod error;
pub mod reset;
pub mod resolver;
pub mod series;
pub mod session;
pub mod state;
pub mod view;

pub use catalog::{CatalogError, CatalogVersion, SecurityCatalog};
pub use domain::{SectorFilter, SecurityRecord, Symbol, TimeSeriesPoint, TradingDate, ALL_SECTORS};
pub use error::ValidationError;
pub use reset::ResetController;
pub use resolver::{Action, ChartClickEvent, Rejection, Resolution};
pub use series::TimeSeriesStore;
pub use session::Session;
pub use state::FilterState;
pub use view::{
    CandidateList, ColorDimension, HighlightOverlay, HighlightStyle, MetricSnapshot, PlotAxes,
    PlotPoint, ScatterSpec, SeriesPoint, TimeSeriesSpec, ViewBundle, ViewConfig,
};
