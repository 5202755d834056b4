use folio_core::enums::FilterKey;
use folio_core::filters::FilterValue;

use super::SelectOption;
use crate::store::FilterStore;

/// Slide-over filter sheet with live commit.
///
/// Holds only its open/closed flag. Selectors read straight from the store and
/// every change is written back immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSheet {
    open: bool,
}

impl FilterSheet {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn open(&mut self) {
        self.open = true;
    }

    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Value the selector for `key` displays.
    #[must_use]
    pub const fn selected(&self, store: &FilterStore, key: FilterKey) -> Option<FilterValue> {
        store.filters().get(key)
    }

    /// Commit a selector choice.
    pub fn select(&self, store: &mut FilterStore, option: &SelectOption) {
        match option.value {
            Some(value) => store.set_filter(value),
            None => store.reset_filter(option.key),
        }
    }

    /// "Reset": clear every filter field.
    pub fn reset(&self, store: &mut FilterStore) {
        store.reset_all_filters();
    }
}
