//! Board state: the view state machine plus the derivation pipeline.
//!
//! The board owns the main dataset, the watchlist store, and the current
//! view/filter/sort/ranking state. After every mutation the displayed view
//! is re-derived from scratch:
//!
//! ```text
//! base      = rank(active dataset)            when a ranking is active
//!           | filter(active dataset)          otherwise
//! displayed = sort(base)                      when a sort is active
//!           | base                            otherwise
//! ```
//!
//! Snapshots only ever replace the main dataset; the watchlist is mutated by
//! toggles and backs the derived views when the watchlist view is selected.

use tracing::{debug, warn};

use warrant_core::{Quote, QuoteRow, SortColumn, SortSpec, ViewState};
use warrant_feed::Snapshot;
use warrant_persistence::{PersistenceResult, WatchlistStore};

use crate::dataset::Dataset;
use crate::filter::{self, FilterCriteria, FilterInput};
use crate::ranking::{self, RankKind};
use crate::sort;

/// Single-writer state container for the quote board.
#[derive(Debug)]
pub struct Board {
    main: Dataset,
    watchlist: WatchlistStore,
    view: ViewState,
    input: FilterInput,
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
    rank: Option<RankKind>,
    displayed: Vec<Quote>,
}

impl Board {
    pub fn new(watchlist: WatchlistStore) -> Self {
        Self {
            main: Dataset::new(),
            watchlist,
            view: ViewState::Main,
            input: FilterInput::default(),
            criteria: FilterCriteria::default(),
            sort: None,
            rank: None,
            displayed: Vec::new(),
        }
    }

    /// Replace the main dataset with a validated snapshot and re-derive the
    /// displayed view under the current criteria/sort/ranking.
    pub fn ingest(&mut self, snapshot: Snapshot) {
        debug!(quotes = snapshot.quotes.len(), "Ingesting snapshot");
        self.main.replace(snapshot.quotes);
        self.refresh();
    }

    /// Switch the active view. Clears filter criteria, sort, and ranking;
    /// the displayed view becomes the full active dataset.
    pub fn select_view(&mut self, view: ViewState) {
        self.view = view;
        self.input = FilterInput::default();
        self.criteria = FilterCriteria::default();
        self.sort = None;
        self.rank = None;
        self.refresh();
    }

    /// Apply filter inputs to the active dataset. Discards any active
    /// ranking; an active sort is re-applied over the new filtered set.
    pub fn set_filters(&mut self, input: FilterInput) {
        self.criteria = FilterCriteria::parse(&input);
        self.input = input;
        self.rank = None;
        self.refresh();
    }

    /// Clear all filters, sort, and ranking; the displayed view returns to
    /// the unfiltered active dataset in its own order.
    pub fn clear_filters(&mut self) {
        self.input = FilterInput::default();
        self.criteria = FilterCriteria::default();
        self.sort = None;
        self.rank = None;
        self.refresh();
    }

    /// Handle a header click on `column`, advancing the sort cycle.
    pub fn sort_column(&mut self, column: SortColumn) {
        self.sort = sort::cycle(self.sort, column);
        self.refresh();
    }

    /// Show the top 10 gainers of the raw active dataset, discarding the
    /// current filter and sort.
    pub fn winners(&mut self) {
        self.set_rank(RankKind::Winners);
    }

    /// Show the top 10 decliners of the raw active dataset, discarding the
    /// current filter and sort.
    pub fn losers(&mut self) {
        self.set_rank(RankKind::Losers);
    }

    fn set_rank(&mut self, kind: RankKind) {
        self.input = FilterInput::default();
        self.criteria = FilterCriteria::default();
        self.sort = None;
        self.rank = Some(kind);
        self.refresh();
    }

    /// Toggle watchlist membership for `symbol`.
    ///
    /// Additions copy the quote's current field values from the main
    /// dataset; a symbol known nowhere is a no-op. The view is re-derived
    /// even when the durable write fails, so the display follows the
    /// in-memory watchlist.
    pub fn toggle(&mut self, symbol: &str) -> PersistenceResult<bool> {
        let snapshot = self.main.get(symbol).cloned();
        let result = self.watchlist.toggle(symbol, snapshot.as_ref());
        if let Err(e) = &result {
            warn!(symbol, error = %e, "Watchlist write failed");
        }
        self.refresh();
        result
    }

    /// The displayed view: ordered quotes with their watchlist flags.
    pub fn rows(&self) -> Vec<QuoteRow> {
        self.displayed
            .iter()
            .map(|quote| QuoteRow {
                quote: quote.clone(),
                watchlisted: self.watchlist.contains(&quote.symbol),
            })
            .collect()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn filter_input(&self) -> &FilterInput {
        &self.input
    }

    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    fn active_quotes(&self) -> &[Quote] {
        match self.view {
            ViewState::Main => self.main.quotes(),
            ViewState::Watchlist => self.watchlist.quotes(),
        }
    }

    fn refresh(&mut self) {
        let base = match self.rank {
            Some(kind) => ranking::rank(self.active_quotes(), kind),
            None => filter::apply(self.active_quotes(), &self.criteria),
        };
        self.displayed = match self.sort {
            Some(spec) => sort::sort(&base, spec),
            None => base,
        };
    }
}
