//! Active-filter chips.
//!
//! One removable chip per non-empty filter field, plus a "Clear All" action.
//! The chip bar is only shown while at least one filter is active.

use folio_core::enums::FilterKey;
use folio_core::filters::{FilterSelection, FilterValue};
use serde::Serialize;

use crate::store::FilterStore;

/// A removable summary of one active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub key: FilterKey,
    pub value: FilterValue,
    pub label: String,
}

impl Chip {
    fn new(value: FilterValue) -> Self {
        let key = value.key();
        let shown = match value {
            // "last-week" reads as "last week"
            FilterValue::DateRange(range) => range.as_str().replacen('-', " ", 1),
            other => other.as_str().to_string(),
        };
        Self {
            key,
            value,
            label: format!("{}: {shown}", key.chip_prefix()),
        }
    }

    /// Remove this chip: resets its field only.
    pub fn remove(&self, store: &mut FilterStore) {
        store.reset_filter(self.key);
    }
}

/// Chips for the active fields, in category, format, date order.
#[must_use]
pub fn active_chips(filters: &FilterSelection) -> Vec<Chip> {
    filters.active().into_iter().map(Chip::new).collect()
}

/// Chip-bar "Clear All".
pub fn clear_all(store: &mut FilterStore) {
    store.reset_all_filters();
}
