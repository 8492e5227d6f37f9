use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Sentinel label for the unfiltered sector option.
pub const ALL_SECTORS: &str = "All";

/// Sector filter value: either the `All` sentinel or a concrete sector label.
///
/// The sector domain itself lives in the catalog; whether a named value is
/// valid there is decided by the resolver, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectorFilter {
    All,
    Named(String),
}

impl SectorFilter {
    /// Parse the `All` sentinel (case-insensitive) or a named sector.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SECTORS) {
            Self::All
        } else {
            Self::Named(trimmed.to_owned())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record in `sector` passes this filter.
    pub fn matches(&self, sector: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == sector,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SECTORS,
            Self::Named(name) => name.as_str(),
        }
    }
}

impl Default for SectorFilter {
    fn default() -> Self {
        Self::All
    }
}

impl Display for SectorFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SectorFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for SectorFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<SectorFilter> for String {
    fn from(value: SectorFilter) -> Self {
        value.as_str().to_owned()
    }
}
