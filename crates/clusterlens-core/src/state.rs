//! Filter/selection state for one interactive session.

use serde::{Deserialize, Serialize};

use crate::{SectorFilter, Symbol};

/// The single state value behind every derived view.
///
/// Fields are read-only outside this crate; transitions go through
/// [`crate::resolver::resolve`] (or [`crate::ResetController`]) so the
/// invariant that a selected symbol is always a valid catalog key cannot be
/// broken by callers.
///
/// Note that a selection made while `All` was active, or made by clicking the
/// chart, may belong to any sector: the sector filters the candidate list, it
/// does not constrain a selection once made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub(crate) sector: SectorFilter,
    pub(crate) search_term: String,
    pub(crate) selected: Option<Symbol>,
}

impl FilterState {
    /// Fresh-session state: all sectors, empty search, nothing selected.
    pub fn initial() -> Self {
        Self {
            sector: SectorFilter::All,
            search_term: String::new(),
            selected: None,
        }
    }

    pub fn sector(&self) -> &SectorFilter {
        &self.sector
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> Option<&Symbol> {
        self.selected.as_ref()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::initial()
    }
}
