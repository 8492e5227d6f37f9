//! Maps user actions onto filter-state transitions.
//!
//! `resolve` is a pure function: it never touches ambient state and never
//! fails. An action that cannot be honored is rejected, and the returned
//! state is the input state unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CatalogVersion, FilterState, SectorFilter, SecurityCatalog, Symbol};

/// A click on a rendered chart point.
///
/// The chart is built from the full catalog in canonical row order, so the
/// index is only meaningful against the ordering that produced it; the event
/// carries that ordering's version and is rejected when it no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartClickEvent {
    pub point_index: usize,
    pub catalog_version: CatalogVersion,
}

/// User actions accepted by the resolver.
///
/// Serialized form is the wire format of CLI replay scripts, e.g.
/// `{"action": "set_sector", "value": "Energy"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Change the sector filter; retains the selection only while it stays
    /// in the candidate list.
    SetSector(SectorFilter),
    /// Change the search term; same retention rule as `SetSector`.
    SetSearchTerm(String),
    /// Dropdown selection, constrained to the visible candidate list. An
    /// empty string clears the selection.
    SelectFromCandidates(String),
    /// Chart-point selection. Privileged: widens the sector filter to the
    /// clicked record's sector instead of being rejected by it.
    ChartClick(ChartClickEvent),
    /// Restore the fresh-session state.
    Reset,
}

/// Why an action was ignored. Never fatal; the state stays unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("sector '{sector}' is not in the catalog's sector domain")]
    UnknownSector { sector: String },

    #[error("symbol '{symbol}' is not in the catalog")]
    UnknownSymbol { symbol: String },

    #[error("'{symbol}' is not in the current candidate list")]
    NotInCandidates { symbol: String },

    #[error("point index {index} out of range for catalog of {len} rows")]
    PointOutOfRange { index: usize, len: usize },

    #[error("click event was built against a different catalog ordering")]
    StaleOrdering,
}

/// Outcome of resolving one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub state: FilterState,
    pub rejected: Option<Rejection>,
}

impl Resolution {
    fn accepted(state: FilterState) -> Self {
        Self {
            state,
            rejected: None,
        }
    }

    fn rejected(state: FilterState, rejection: Rejection) -> Self {
        Self {
            state,
            rejected: Some(rejection),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected.is_some()
    }
}

/// Resolve `action` against the current state and catalog.
pub fn resolve(state: &FilterState, action: &Action, catalog: &SecurityCatalog) -> Resolution {
    match action {
        Action::SetSector(sector) => set_sector(state, sector, catalog),
        Action::SetSearchTerm(term) => set_search_term(state, term, catalog),
        Action::SelectFromCandidates(symbol) => select_from_candidates(state, symbol, catalog),
        Action::ChartClick(event) => chart_click(state, event, catalog),
        Action::Reset => Resolution::accepted(FilterState::initial()),
    }
}

fn set_sector(state: &FilterState, sector: &SectorFilter, catalog: &SecurityCatalog) -> Resolution {
    if let SectorFilter::Named(name) = sector {
        if !catalog.contains_sector(name) {
            return Resolution::rejected(
                state.clone(),
                Rejection::UnknownSector {
                    sector: name.clone(),
                },
            );
        }
    }

    let mut next = state.clone();
    next.sector = sector.clone();
    next.selected = retained_selection(&next, catalog);
    Resolution::accepted(next)
}

fn set_search_term(state: &FilterState, term: &str, catalog: &SecurityCatalog) -> Resolution {
    let mut next = state.clone();
    next.search_term = term.to_owned();
    next.selected = retained_selection(&next, catalog);
    Resolution::accepted(next)
}

fn select_from_candidates(
    state: &FilterState,
    symbol: &str,
    catalog: &SecurityCatalog,
) -> Resolution {
    if symbol.trim().is_empty() {
        let mut next = state.clone();
        next.selected = None;
        return Resolution::accepted(next);
    }

    let parsed = match Symbol::parse(symbol) {
        Ok(parsed) => parsed,
        Err(_) => {
            return Resolution::rejected(
                state.clone(),
                Rejection::UnknownSymbol {
                    symbol: symbol.to_owned(),
                },
            )
        }
    };

    if !catalog.contains(&parsed) {
        return Resolution::rejected(
            state.clone(),
            Rejection::UnknownSymbol {
                symbol: parsed.to_string(),
            },
        );
    }

    let visible = catalog
        .filter(&state.sector, &state.search_term)
        .iter()
        .any(|record| record.symbol == parsed);
    if !visible {
        return Resolution::rejected(
            state.clone(),
            Rejection::NotInCandidates {
                symbol: parsed.to_string(),
            },
        );
    }

    let mut next = state.clone();
    next.selected = Some(parsed);
    Resolution::accepted(next)
}

fn chart_click(
    state: &FilterState,
    event: &ChartClickEvent,
    catalog: &SecurityCatalog,
) -> Resolution {
    if event.catalog_version != catalog.version() {
        return Resolution::rejected(state.clone(), Rejection::StaleOrdering);
    }

    let Ok(record) = catalog.by_index(event.point_index) else {
        return Resolution::rejected(
            state.clone(),
            Rejection::PointOutOfRange {
                index: event.point_index,
                len: catalog.len(),
            },
        );
    };

    let mut next = state.clone();
    next.sector = SectorFilter::Named(record.sector.clone());
    next.selected = Some(record.symbol.clone());
    Resolution::accepted(next)
}

/// Selection retention rule for filter changes: keep the selected symbol only
/// while it still appears in the new candidate list.
fn retained_selection(next: &FilterState, catalog: &SecurityCatalog) -> Option<Symbol> {
    let selected = next.selected.as_ref()?;
    let visible = catalog
        .filter(&next.sector, &next.search_term)
        .iter()
        .any(|record| &record.symbol == selected);
    visible.then(|| selected.clone())
}
