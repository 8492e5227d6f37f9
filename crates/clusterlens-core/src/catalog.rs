//! Read-only view over the clustering snapshot.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{SectorFilter, SecurityRecord, Symbol, ALL_SECTORS};

/// Catalog lookup failures.
///
/// These surface as resolver rejections, never as fatal errors; an empty
/// filter result is a valid outcome and has no error variant at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown symbol '{symbol}'")]
    UnknownSymbol { symbol: String },

    #[error("point index {index} out of range for catalog of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("duplicate symbol '{symbol}' in snapshot")]
    DuplicateSymbol { symbol: String },
}

/// Fingerprint of the canonical row order.
///
/// A chart is always rendered from the full catalog in canonical order; click
/// events carry the version they were rendered against so the resolver never
/// trusts a point index from a different ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogVersion(u64);

/// Read-only, session-immutable catalog of clustered securities.
#[derive(Debug, Clone)]
pub struct SecurityCatalog {
    records: Vec<SecurityRecord>,
    by_symbol: HashMap<Symbol, usize>,
    sectors: Vec<String>,
    version: CatalogVersion,
}

impl SecurityCatalog {
    /// Build a catalog from snapshot rows, keeping their order as canonical.
    pub fn from_records(records: Vec<SecurityRecord>) -> Result<Self, CatalogError> {
        let mut by_symbol = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_symbol.insert(record.symbol.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSymbol {
                    symbol: record.symbol.to_string(),
                });
            }
        }

        let mut sectors = records
            .iter()
            .map(|record| record.sector.clone())
            .collect::<Vec<_>>();
        sectors.sort();
        sectors.dedup();

        let version = fingerprint(&records);

        Ok(Self {
            records,
            by_symbol,
            sectors,
            version,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Canonical (unfiltered) row order, as rendered into the 3D plot.
    pub fn records(&self) -> &[SecurityRecord] {
        &self.records
    }

    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    /// Sector options for the dropdown: `All` followed by the distinct
    /// sectors sorted ascending. Fixed for the session.
    pub fn sector_options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.sectors.len() + 1);
        options.push(ALL_SECTORS.to_owned());
        options.extend(self.sectors.iter().cloned());
        options
    }

    pub fn contains_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|known| known == sector)
    }

    /// Candidate list for the current sector filter and search term.
    ///
    /// Ordered by average volume descending, ties broken by symbol ascending
    /// so the order is deterministic. Empty output is valid.
    pub fn filter(&self, sector: &SectorFilter, search_term: &str) -> Vec<&SecurityRecord> {
        let needle = search_term.to_lowercase();
        let mut matches = self
            .records
            .iter()
            .filter(|record| sector.matches(&record.sector))
            .filter(|record| {
                needle.is_empty() || record.display_name().to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>();

        matches.sort_by(|a, b| {
            b.avg_volume
                .total_cmp(&a.avg_volume)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        matches
    }

    /// Row at `index` in the canonical order. Used only by click resolution.
    pub fn by_index(&self, index: usize) -> Result<&SecurityRecord, CatalogError> {
        self.records
            .get(index)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    pub fn by_symbol(&self, symbol: &Symbol) -> Result<&SecurityRecord, CatalogError> {
        self.by_symbol
            .get(symbol)
            .map(|&index| &self.records[index])
            .ok_or_else(|| CatalogError::UnknownSymbol {
                symbol: symbol.to_string(),
            })
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.by_symbol.contains_key(symbol)
    }
}

fn fingerprint(records: &[SecurityRecord]) -> CatalogVersion {
    let mut hasher = DefaultHasher::new();
    records.len().hash(&mut hasher);
    for record in records {
        record.symbol.as_str().hash(&mut hasher);
    }
    CatalogVersion(hasher.finish())
}
