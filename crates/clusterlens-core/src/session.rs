//! Hosting shell for one interactive session.

use crate::{
    resolver, view, Action, FilterState, Rejection, SecurityCatalog, TimeSeriesStore, ViewBundle,
    ViewConfig,
};

/// Owns the single current [`FilterState`] and threads it through the
/// resolver; catalog and store are loaded once and immutable thereafter.
///
/// Each action is handled to completion (resolve, then rebuild the bundle)
/// before the next one; there is no concurrency and no hidden render state.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: SecurityCatalog,
    store: TimeSeriesStore,
    config: ViewConfig,
    state: FilterState,
}

impl Session {
    pub fn new(catalog: SecurityCatalog, store: TimeSeriesStore, config: ViewConfig) -> Self {
        Self {
            catalog,
            store,
            config,
            state: FilterState::initial(),
        }
    }

    pub fn catalog(&self) -> &SecurityCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply one action and derive the next view bundle.
    ///
    /// A rejected action leaves the state unchanged; the rejection is
    /// returned so the shell can surface it as a warning.
    pub fn apply(&mut self, action: &Action) -> (ViewBundle, Option<Rejection>) {
        let resolution = resolver::resolve(&self.state, action, &self.catalog);
        self.state = resolution.state;
        (self.view(), resolution.rejected)
    }

    /// Re-derive the bundle for the current state without a transition.
    pub fn view(&self) -> ViewBundle {
        view::build(&self.catalog, &self.store, &self.state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SectorFilter, SecurityRecord, Symbol};

    fn session() -> Session {
        let catalog = SecurityCatalog::from_records(vec![
            SecurityRecord::new(
                Symbol::parse("AAPL").expect("symbol"),
                "Information Technology",
                0.4,
                0.2,
                1.0,
                1,
                "Growth",
                90.0,
            )
            .expect("record"),
            SecurityRecord::new(
                Symbol::parse("XOM").expect("symbol"),
                "Energy",
                0.1,
                0.3,
                0.5,
                2,
                "Value",
                40.0,
            )
            .expect("record"),
        ])
        .expect("catalog");
        Session::new(catalog, TimeSeriesStore::default(), ViewConfig::default())
    }

    #[test]
    fn apply_threads_state_through_transitions() {
        let mut session = session();
        let (_, rejected) = session.apply(&Action::SetSector(SectorFilter::parse("Energy")));
        assert!(rejected.is_none());

        let (bundle, rejected) =
            session.apply(&Action::SelectFromCandidates(String::from("XOM")));
        assert!(rejected.is_none());
        assert_eq!(
            bundle.metrics.as_ref().map(|m| m.symbol.as_str()),
            Some("XOM")
        );
    }

    #[test]
    fn rejected_action_keeps_state_and_reports() {
        let mut session = session();
        let before = session.state().clone();
        let (bundle, rejected) =
            session.apply(&Action::SelectFromCandidates(String::from("TSLA")));
        assert!(rejected.is_some());
        assert_eq!(session.state(), &before);
        assert!(bundle.highlight.is_none());
    }

    #[test]
    fn reset_view_equals_fresh_session_view() {
        let mut session = session();
        session.apply(&Action::SetSearchTerm(String::from("xo")));
        session.apply(&Action::SelectFromCandidates(String::from("XOM")));
        let (after_reset, _) = session.apply(&Action::Reset);

        assert_eq!(after_reset, self::session().view());
    }
}
