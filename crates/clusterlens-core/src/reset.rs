//! Session reset.

use crate::FilterState;

/// Restores the fresh-session state.
///
/// Reset is total: sector, search term, and selection all go back to their
/// initial values, so the derived view bundle after a reset is value-equal to
/// the bundle of a freshly started session. There is no partial reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetController;

impl ResetController {
    pub fn reset(&self, _current: &FilterState) -> FilterState {
        FilterState::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectorFilter;

    #[test]
    fn reset_discards_every_field() {
        let mut dirty = FilterState::initial();
        dirty.sector = SectorFilter::parse("Energy");
        dirty.search_term = String::from("xo");

        let reset = ResetController.reset(&dirty);
        assert_eq!(reset, FilterState::initial());
    }
}
