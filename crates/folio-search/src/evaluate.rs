//! The filter evaluator.
//!
//! A pure function from (catalog, search term, filter selection, now) to the
//! ordered list of matching items. Each non-empty input narrows the result;
//! all predicates are conjunctive, so the order in which the steps run never
//! changes the outcome, only the cost. Catalog order is preserved.

use chrono::{DateTime, Duration, Months, Utc};
use folio_core::catalog::Catalog;
use folio_core::entities::ResearchItem;
use folio_core::enums::{Category, DateRange, Format};
use folio_core::filters::FilterSelection;

/// One narrowing pass of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Search,
    Category,
    Format,
    DateRange,
}

impl Step {
    /// Order used by [`evaluate`].
    pub const ORDER: [Self; 4] = [Self::Search, Self::Category, Self::Format, Self::DateRange];
}

/// Start of the recency window for `range`, counted back from `now`.
///
/// A week is exactly seven days. Months and years use calendar arithmetic and
/// clamp the day of month when it does not exist in the target month
/// (2024-03-31 minus one month is 2024-02-29).
#[must_use]
pub fn cutoff(range: DateRange, now: DateTime<Utc>) -> DateTime<Utc> {
    let shifted = match range {
        DateRange::LastWeek => now.checked_sub_signed(Duration::days(7)),
        DateRange::LastMonth => now.checked_sub_months(Months::new(1)),
        DateRange::LastYear => now.checked_sub_months(Months::new(12)),
    };
    shifted.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Predicates compiled once per evaluation.
#[derive(Debug, Clone)]
struct Predicates {
    needle: Option<String>,
    category: Option<Category>,
    format: Option<Format>,
    cutoff: Option<DateTime<Utc>>,
}

impl Predicates {
    fn new(search_term: &str, filters: &FilterSelection, now: DateTime<Utc>) -> Self {
        Self {
            needle: (!search_term.is_empty()).then(|| search_term.to_lowercase()),
            category: filters.category,
            format: filters.format,
            cutoff: filters.date_range.map(|range| cutoff(range, now)),
        }
    }

    fn step_matches(&self, step: Step, item: &ResearchItem) -> bool {
        match step {
            Step::Search => self.needle.as_deref().is_none_or(|needle| {
                item.title.to_lowercase().contains(needle)
                    || item.category.as_str().to_lowercase().contains(needle)
            }),
            Step::Category => self.category.is_none_or(|category| item.category == category),
            Step::Format => self.format.is_none_or(|format| item.format == format),
            Step::DateRange => self.cutoff.is_none_or(|cutoff| item.date >= cutoff),
        }
    }

    fn matches(&self, item: &ResearchItem) -> bool {
        Step::ORDER.iter().all(|step| self.step_matches(*step, item))
    }
}

/// Whether a single item passes every active constraint.
#[must_use]
pub fn matches(
    item: &ResearchItem,
    search_term: &str,
    filters: &FilterSelection,
    now: DateTime<Utc>,
) -> bool {
    Predicates::new(search_term, filters, now).matches(item)
}

/// Compute the visible result set.
///
/// Rescans the whole catalog on every call; the catalog is small and
/// in-memory.
#[must_use]
pub fn evaluate(
    catalog: &Catalog,
    search_term: &str,
    filters: &FilterSelection,
    now: DateTime<Utc>,
) -> Vec<ResearchItem> {
    let predicates = Predicates::new(search_term, filters, now);
    let results = catalog
        .iter()
        .filter(|item| predicates.matches(item))
        .cloned()
        .collect::<Vec<_>>();

    tracing::debug!(
        search_term,
        category = ?filters.category,
        format = ?filters.format,
        date_range = ?filters.date_range,
        matched = results.len(),
        total = catalog.len(),
        "evaluated research filters"
    );

    results
}

/// Run the narrowing steps one after another in the given order.
///
/// Produces the same set as [`evaluate`] for any permutation of
/// [`Step::ORDER`]; steps left out of `order` are not applied.
#[must_use]
pub fn evaluate_in_order(
    catalog: &Catalog,
    search_term: &str,
    filters: &FilterSelection,
    now: DateTime<Utc>,
    order: &[Step],
) -> Vec<ResearchItem> {
    let predicates = Predicates::new(search_term, filters, now);
    let mut results = catalog.items().to_vec();
    for step in order {
        results.retain(|item| predicates.step_matches(*step, item));
    }
    results
}
