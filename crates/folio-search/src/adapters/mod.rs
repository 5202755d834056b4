//! Filter UI adapters.
//!
//! Two front-ends share one [`FilterStore`](crate::store::FilterStore):
//! - [`FilterSheet`]: live. Each selection is committed to the store at once.
//! - [`FilterPanel`]: staged. Selections go to a local draft and reach the
//!   store only on [`FilterPanel::apply`].
//!
//! Both render the same single-choice selectors ([`options`]) and the page
//! shows the same active-filter [`chips`].

pub mod chips;
mod panel;
mod sheet;

pub use chips::{Chip, active_chips};
pub use panel::{FilterPanel, PanelPosition};
pub use sheet::FilterSheet;

use folio_core::enums::{Category, DateRange, FilterKey, Format};
use folio_core::filters::{FilterSelection, FilterValue};
use serde::Serialize;

/// One entry of a filter selector.
///
/// `value == None` is the leading "All ..." sentinel that clears the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub key: FilterKey,
    pub value: Option<FilterValue>,
    pub label: &'static str,
}

impl SelectOption {
    /// Write this choice into `selection`.
    pub const fn apply_to(&self, selection: &mut FilterSelection) {
        match self.value {
            Some(value) => selection.set(value),
            None => selection.clear(self.key),
        }
    }

    /// Whether this option reflects the current value of its field.
    #[must_use]
    pub fn is_selected(&self, selection: &FilterSelection) -> bool {
        selection.get(self.key) == self.value
    }
}

/// The selector for one dimension: sentinel first, then every value.
#[must_use]
pub fn options(key: FilterKey) -> Vec<SelectOption> {
    let values: Vec<FilterValue> = match key {
        FilterKey::Category => Category::ALL.into_iter().map(FilterValue::Category).collect(),
        FilterKey::Format => Format::ALL.into_iter().map(FilterValue::Format).collect(),
        FilterKey::DateRange => DateRange::ALL
            .into_iter()
            .map(FilterValue::DateRange)
            .collect(),
    };

    std::iter::once(SelectOption {
        key,
        value: None,
        label: key.all_label(),
    })
    .chain(values.into_iter().map(|value| SelectOption {
        key,
        value: Some(value),
        label: value.label(),
    }))
    .collect()
}
