//! One Research page session.
//!
//! [`ResearchPage`] owns the store, both filter adapters, and the current
//! result state. Inbound UI events go through [`ResearchPage::dispatch`]; the
//! page re-evaluates synchronously whenever the store revision moved, so the
//! results always match the latest mutation before anything is rendered.

use std::sync::Arc;

use folio_core::catalog::Catalog;
use folio_core::enums::FilterKey;
use folio_core::filters::FilterSelection;
use serde::Serialize;

use crate::adapters::{
    Chip, FilterPanel, FilterSheet, PanelPosition, SelectOption, active_chips, chips,
};
use crate::clock::{Clock, SystemClock};
use crate::evaluate::evaluate;
use crate::render::{ResultState, ResultView, render};
use crate::store::{FilterStore, StoreEvent, SubscriptionId};

/// A raw user-interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Text typed into the search box (replaces the term).
    Search(String),
    SheetOpen,
    SheetClose,
    SheetSelect(SelectOption),
    SheetReset,
    PanelShow,
    PanelHide,
    PanelToggle,
    PanelSelect(SelectOption),
    PanelApply,
    PanelReset,
    RemoveChip(FilterKey),
    /// Chip-bar "Clear All".
    ClearChips,
    /// Empty-state "Clear Filters".
    ClearFilters,
}

/// Serializable snapshot for parent layouts and CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub search_term: String,
    pub filters: FilterSelection,
    pub chips: Vec<String>,
    pub sheet_open: bool,
    pub panel: PanelPosition,
    pub catalog_size: usize,
    pub result_count: Option<usize>,
    pub result_ids: Vec<u32>,
}

#[derive(Debug)]
pub struct ResearchPage {
    catalog: Arc<Catalog>,
    store: FilterStore,
    sheet: FilterSheet,
    panel: FilterPanel,
    clock: Box<dyn Clock>,
    results: ResultState,
    evaluated_revision: Option<u64>,
}

impl ResearchPage {
    /// Mount the page with empty inputs and run the first evaluation.
    #[must_use]
    pub fn mount(catalog: Arc<Catalog>, clock: Box<dyn Clock>) -> Self {
        let mut page = Self {
            catalog,
            store: FilterStore::new(),
            sheet: FilterSheet::new(),
            panel: FilterPanel::new(),
            clock,
            results: ResultState::Pending,
            evaluated_revision: None,
        };
        page.refresh();
        page
    }

    #[must_use]
    pub fn with_system_clock(catalog: Arc<Catalog>) -> Self {
        Self::mount(catalog, Box::new(SystemClock))
    }

    /// Route one event to its adapter, then re-evaluate if the store changed.
    ///
    /// Returns `true` when the result set was recomputed.
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        tracing::debug!(?event, "research page event");
        match event {
            PageEvent::Search(text) => self.store.set_search_term(text),
            PageEvent::SheetOpen => self.sheet.open(),
            PageEvent::SheetClose => self.sheet.close(),
            PageEvent::SheetSelect(option) => self.sheet.select(&mut self.store, &option),
            PageEvent::SheetReset => self.sheet.reset(&mut self.store),
            PageEvent::PanelShow => self.panel.show(&self.store),
            PageEvent::PanelHide => self.panel.hide(),
            PageEvent::PanelToggle => self.panel.toggle(&self.store),
            PageEvent::PanelSelect(option) => self.panel.select(&option),
            PageEvent::PanelApply => self.panel.apply(&mut self.store),
            PageEvent::PanelReset => self.panel.reset(&mut self.store),
            PageEvent::RemoveChip(key) => self.store.reset_filter(key),
            PageEvent::ClearChips => chips::clear_all(&mut self.store),
            PageEvent::ClearFilters => self.store.clear_all(),
        }
        self.refresh()
    }

    /// Register an observer on the underlying store.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&StoreEvent<'_>) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &FilterStore {
        &self.store
    }

    #[must_use]
    pub const fn sheet(&self) -> &FilterSheet {
        &self.sheet
    }

    #[must_use]
    pub const fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    #[must_use]
    pub const fn results(&self) -> &ResultState {
        &self.results
    }

    #[must_use]
    pub fn view(&self) -> ResultView {
        render(&self.results)
    }

    #[must_use]
    pub fn chips(&self) -> Vec<Chip> {
        active_chips(self.store.filters())
    }

    #[must_use]
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            search_term: self.store.search_term().to_string(),
            filters: *self.store.filters(),
            chips: self.chips().into_iter().map(|chip| chip.label).collect(),
            sheet_open: self.sheet.is_open(),
            panel: self.panel.position(),
            catalog_size: self.catalog.len(),
            result_count: self.results.count(),
            result_ids: self
                .results
                .items()
                .unwrap_or_default()
                .iter()
                .map(|item| item.id)
                .collect(),
        }
    }

    fn refresh(&mut self) -> bool {
        let revision = self.store.revision();
        if self.evaluated_revision == Some(revision) {
            return false;
        }

        let state = self.store.state();
        let items = evaluate(
            &self.catalog,
            &state.search_term,
            &state.filters,
            self.clock.now(),
        );
        self.results = ResultState::Ready(items);
        self.evaluated_revision = Some(revision);
        true
    }
}
