//! The filter state store.
//!
//! Single source of truth for the search term and the active filter selection.
//! Both filter adapters write through it. Every mutator bumps the revision and
//! notifies subscribers synchronously before returning, even when the new value
//! equals the old one.

use std::fmt;

use folio_core::enums::FilterKey;
use folio_core::filters::{FilterSelection, FilterValue};
use serde::Serialize;

/// Search term plus filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search_term: String,
    pub filters: FilterSelection,
}

/// Which mutator produced a [`StoreEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    SearchTerm,
    SetFilter { value: FilterValue },
    ResetFilter { key: FilterKey },
    ResetAllFilters,
    ReplaceFilters,
    ClearAll,
}

/// Notification delivered to subscribers after a mutation.
#[derive(Debug, Clone, Copy)]
pub struct StoreEvent<'a> {
    pub revision: u64,
    pub mutation: Mutation,
    pub state: &'a FilterState,
}

/// Handle returned by [`FilterStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent<'_>)>;

#[derive(Default)]
pub struct FilterStore {
    state: FilterState,
    revision: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FilterStore {
    /// A store with an empty search term and no active filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSelection {
        &self.state.filters
    }

    /// Number of mutations applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a callback that runs after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Replace the search term verbatim. Case folding happens at evaluation.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.state.search_term = text.into();
        self.commit(Mutation::SearchTerm);
    }

    /// Replace exactly one filter field.
    pub fn set_filter(&mut self, value: FilterValue) {
        self.state.filters.set(value);
        self.commit(Mutation::SetFilter { value });
    }

    /// Set one filter field back to "no filter".
    pub fn reset_filter(&mut self, key: FilterKey) {
        self.state.filters.clear(key);
        self.commit(Mutation::ResetFilter { key });
    }

    /// Clear every filter field. The search term is kept.
    pub fn reset_all_filters(&mut self) {
        self.state.filters = FilterSelection::default();
        self.commit(Mutation::ResetAllFilters);
    }

    /// Replace all filter fields in a single mutation.
    pub fn replace_filters(&mut self, filters: FilterSelection) {
        self.state.filters = filters;
        self.commit(Mutation::ReplaceFilters);
    }

    /// Clear the search term and every filter field.
    pub fn clear_all(&mut self) {
        self.state = FilterState::default();
        self.commit(Mutation::ClearAll);
    }

    fn commit(&mut self, mutation: Mutation) {
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            ?mutation,
            search_term = %self.state.search_term,
            filters = ?self.state.filters,
            "filter store updated"
        );

        let event = StoreEvent {
            revision: self.revision,
            mutation,
            state: &self.state,
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}
