use folio_core::enums::FilterKey;
use folio_core::filters::{FilterSelection, FilterValue};
use serde::Serialize;

use super::SelectOption;
use crate::store::FilterStore;

/// Where the panel sits. Purely informational for hosts that animate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPosition {
    Shown,
    Offscreen,
}

/// Standalone filter panel with staged commit.
///
/// Selector changes are buffered in a draft. The store only sees them on
/// [`apply`](Self::apply), which commits the whole draft as one mutation and
/// hides the panel. [`reset`](Self::reset) is the exception: it clears the
/// draft and the store's filters immediately and leaves the panel visible.
///
/// Showing the panel re-seeds the draft from the store so it never starts from
/// stale values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    visible: bool,
    draft: FilterSelection,
}

impl FilterPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn position(&self) -> PanelPosition {
        if self.visible {
            PanelPosition::Shown
        } else {
            PanelPosition::Offscreen
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &FilterSelection {
        &self.draft
    }

    /// Whether the draft differs from what the store holds.
    #[must_use]
    pub fn has_pending_changes(&self, store: &FilterStore) -> bool {
        self.draft != *store.filters()
    }

    pub fn show(&mut self, store: &FilterStore) {
        self.draft = *store.filters();
        self.visible = true;
    }

    /// Hide without committing. The draft is kept.
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self, store: &FilterStore) {
        if self.visible {
            self.hide();
        } else {
            self.show(store);
        }
    }

    /// Buffer a selector choice in the draft.
    pub const fn select(&mut self, option: &SelectOption) {
        option.apply_to(&mut self.draft);
    }

    pub const fn stage(&mut self, value: FilterValue) {
        self.draft.set(value);
    }

    pub const fn unstage(&mut self, key: FilterKey) {
        self.draft.clear(key);
    }

    /// "Apply Filters": commit the draft and hide.
    pub fn apply(&mut self, store: &mut FilterStore) {
        store.replace_filters(self.draft);
        self.hide();
    }

    /// "Reset": clear the draft and commit the cleared filters right away.
    pub fn reset(&mut self, store: &mut FilterStore) {
        self.draft = FilterSelection::default();
        store.reset_all_filters();
    }
}
