mod date;
mod record;
mod sector;
mod symbol;

pub use date::TradingDate;
pub use record::{SecurityRecord, TimeSeriesPoint};
pub use sector::{SectorFilter, ALL_SECTORS};
pub use symbol::Symbol;
