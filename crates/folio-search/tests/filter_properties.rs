//! Behavioural properties of the evaluator and store over the sample catalog.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use folio_core::catalog::Catalog;
use folio_core::entities::ResearchItem;
use folio_core::enums::{Category, DateRange, FilterKey, Format};
use folio_core::filters::{FilterSelection, FilterValue};
use folio_search::clock::FixedClock;
use folio_search::evaluate::{Step, evaluate, evaluate_in_order};
use folio_search::page::{PageEvent, ResearchPage};
use folio_search::store::FilterStore;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 9, 15, 12, 0, 0).unwrap()
}

fn ids(items: &[ResearchItem]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

fn run(store: &FilterStore, catalog: &Catalog) -> Vec<u32> {
    ids(&evaluate(catalog, store.search_term(), store.filters(), now()))
}

fn item(id: u32, date: DateTime<Utc>) -> ResearchItem {
    ResearchItem {
        id,
        title: format!("Item {id}"),
        category: Category::Abstract,
        format: Format::Png,
        size: "100x100".into(),
        date,
    }
}

fn all_steps_permutations() -> Vec<Vec<Step>> {
    let mut out = Vec::new();
    let steps = Step::ORDER;
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let picks = [a, b, c, d];
                    let mut sorted = picks;
                    sorted.sort_unstable();
                    if sorted == [0, 1, 2, 3] {
                        out.push(picks.iter().map(|i| steps[*i]).collect());
                    }
                }
            }
        }
    }
    out
}

#[test]
fn all_empty_inputs_return_full_catalog_in_order() {
    let catalog = Catalog::sample();
    let results = evaluate(&catalog, "", &FilterSelection::default(), now());
    assert_eq!(results, catalog.items().to_vec());
}

#[rstest]
#[case("", FilterSelection::default())]
#[case("image 1", FilterSelection::default())]
#[case("", FilterSelection { category: Some(Category::Product), format: None, date_range: Some(DateRange::LastYear) })]
#[case("arch", FilterSelection { category: None, format: Some(Format::Jpg), date_range: None })]
fn evaluation_is_idempotent(#[case] term: &str, #[case] filters: FilterSelection) {
    let catalog = Catalog::sample();
    let first = evaluate(&catalog, term, &filters, now());
    let second = evaluate(&catalog, term, &filters, now());
    assert_eq!(first, second);
}

#[rstest]
#[case(FilterValue::Category(Category::Nature))]
#[case(FilterValue::Format(Format::Tiff))]
#[case(FilterValue::DateRange(DateRange::LastMonth))]
#[case(FilterValue::DateRange(DateRange::LastYear))]
fn adding_a_filter_never_grows_results(#[case] value: FilterValue) {
    let catalog = Catalog::sample();
    for term in ["", "image", "pro", "zzz"] {
        for base in [
            FilterSelection::default(),
            FilterSelection {
                format: Some(Format::Svg),
                ..FilterSelection::default()
            },
        ] {
            if base.get(value.key()).is_some() {
                continue;
            }
            let mut narrowed = base;
            narrowed.set(value);
            let before = evaluate(&catalog, term, &base, now()).len();
            let after = evaluate(&catalog, term, &narrowed, now()).len();
            assert!(after <= before, "{value:?} grew results for '{term}'");
        }
    }
}

#[rstest]
#[case("nature")]
#[case("Image 1")]
#[case("research")]
fn adding_a_search_term_never_grows_results(#[case] term: &str) {
    let catalog = Catalog::sample();
    let filters = FilterSelection {
        date_range: Some(DateRange::LastYear),
        ..FilterSelection::default()
    };
    let before = evaluate(&catalog, "", &filters, now()).len();
    let after = evaluate(&catalog, term, &filters, now()).len();
    assert!(after <= before);
}

#[test]
fn step_order_does_not_change_results() {
    let catalog = Catalog::sample();
    let filters = FilterSelection {
        category: Some(Category::Architecture),
        format: Some(Format::Jpg),
        date_range: Some(DateRange::LastYear),
    };
    let expected = evaluate(&catalog, "image", &filters, now());
    let permutations = all_steps_permutations();
    assert_eq!(permutations.len(), 24);
    for order in permutations {
        let got = evaluate_in_order(&catalog, "image", &filters, now(), &order);
        assert_eq!(got, expected, "order {order:?}");
    }
}

#[test]
fn removing_category_chip_matches_never_setting_it() {
    let catalog = Catalog::sample();

    let mut with_chip = FilterStore::new();
    with_chip.set_filter(FilterValue::Category(Category::Nature));
    with_chip.set_filter(FilterValue::Format(Format::Png));
    with_chip.reset_filter(FilterKey::Category);

    let mut never = FilterStore::new();
    never.set_filter(FilterValue::Format(Format::Png));

    assert_eq!(with_chip.filters().format, Some(Format::Png));
    assert_eq!(run(&with_chip, &catalog), run(&never, &catalog));
    assert_eq!(run(&with_chip, &catalog), vec![2, 6, 10, 14]);
}

#[test]
fn clear_all_always_restores_full_catalog() {
    let catalog = Catalog::sample();
    let mut store = FilterStore::new();
    store.set_search_term("no such thing");
    store.set_filter(FilterValue::Category(Category::Product));
    store.set_filter(FilterValue::Format(Format::Svg));
    store.set_filter(FilterValue::DateRange(DateRange::LastWeek));
    assert!(run(&store, &catalog).is_empty());

    store.clear_all();
    assert_eq!(run(&store, &catalog), (1..=16).collect::<Vec<_>>());
}

#[test]
fn nature_category_yields_every_fourth_item() {
    let catalog = Catalog::sample();
    let mut store = FilterStore::new();
    store.set_filter(FilterValue::Category(Category::Nature));
    assert_eq!(run(&store, &catalog), vec![3, 7, 11, 15]);
}

#[rstest]
#[case(Format::Svg, vec![3, 7, 11, 15])]
#[case(Format::Png, vec![])]
#[case(Format::Jpg, vec![])]
#[case(Format::Tiff, vec![])]
fn nature_items_are_all_svg(#[case] format: Format, #[case] expected: Vec<u32>) {
    // Category and format both cycle on index % 4, so they move in lockstep.
    let catalog = Catalog::sample();
    let mut store = FilterStore::new();
    store.set_filter(FilterValue::Category(Category::Nature));
    store.set_filter(FilterValue::Format(format));
    assert_eq!(run(&store, &catalog), expected);
}

#[rstest]
#[case(DateRange::LastWeek, 10, false)]
#[case(DateRange::LastWeek, 3, true)]
#[case(DateRange::LastWeek, 7, true)]
#[case(DateRange::LastMonth, 20, true)]
#[case(DateRange::LastMonth, 40, false)]
#[case(DateRange::LastYear, 300, true)]
#[case(DateRange::LastYear, 400, false)]
fn date_range_window(#[case] range: DateRange, #[case] days_ago: i64, #[case] included: bool) {
    let catalog = Catalog::new(vec![item(1, now() - Duration::days(days_ago))]).unwrap();
    let filters = FilterSelection {
        date_range: Some(range),
        ..FilterSelection::default()
    };
    let results = evaluate(&catalog, "", &filters, now());
    assert_eq!(!results.is_empty(), included);
}

#[test]
fn last_week_excludes_ten_days_and_includes_three() {
    let catalog = Catalog::new(vec![
        item(1, now() - Duration::days(10)),
        item(2, now() - Duration::days(3)),
    ])
    .unwrap();
    let filters = FilterSelection {
        date_range: Some(DateRange::LastWeek),
        ..FilterSelection::default()
    };
    assert_eq!(ids(&evaluate(&catalog, "", &filters, now())), vec![2]);
}

#[test]
fn sample_dates_against_last_month() {
    // Sample dates run 2023-01-01 .. 2023-12-12; now is 2023-09-15T12:00Z.
    let catalog = Catalog::sample();
    let filters = FilterSelection {
        date_range: Some(DateRange::LastMonth),
        ..FilterSelection::default()
    };
    // 2023-08-15T12:00Z onward: Sep 9 (id 9), Oct 10, Nov 11, Dec 12.
    assert_eq!(
        ids(&evaluate(&catalog, "", &filters, now())),
        vec![9, 10, 11, 12]
    );
}

#[test]
fn search_arch_matches_every_sample_title() {
    // "arch" is a substring of "Research".
    let catalog = Catalog::sample();
    let results = evaluate(&catalog, "arch", &FilterSelection::default(), now());
    assert_eq!(results.len(), 16);
}

#[test]
fn search_matches_category_name_independent_of_title() {
    let catalog = Catalog::sample();
    let results = evaluate(&catalog, "tect", &FilterSelection::default(), now());
    assert_eq!(ids(&results), vec![1, 5, 9, 13]);
    assert!(results.iter().all(|item| item.category == Category::Architecture));
    assert!(results.iter().all(|item| !item.title.to_lowercase().contains("tect")));
}

#[test]
fn search_reaches_items_through_category_alone() {
    let mut facade = item(1, now());
    facade.title = "Facade study".into();
    facade.category = Category::Architecture;
    let mut meadow = item(2, now());
    meadow.title = "Meadow".into();
    meadow.category = Category::Nature;
    let catalog = Catalog::new(vec![facade, meadow]).unwrap();

    let results = evaluate(&catalog, "arch", &FilterSelection::default(), now());
    assert_eq!(ids(&results), vec![1]);
}

#[test]
fn search_term_matching_every_title() {
    let catalog = Catalog::sample();
    let results = evaluate(&catalog, "RESEARCH", &FilterSelection::default(), now());
    assert_eq!(results.len(), 16);
}

#[test]
fn page_session_walkthrough() {
    let mut page = ResearchPage::mount(Arc::new(Catalog::sample()), Box::new(FixedClock(now())));

    page.dispatch(PageEvent::Search("image".into()));
    page.dispatch(PageEvent::SheetOpen);
    page.dispatch(PageEvent::SheetSelect(
        folio_search::adapters::options(FilterKey::Category)[3],
    ));
    assert_eq!(page.summary().result_ids, vec![3, 7, 11, 15]);
    assert_eq!(page.summary().chips, vec!["Category: Nature".to_string()]);

    page.dispatch(PageEvent::SheetSelect(
        folio_search::adapters::options(FilterKey::Format)[2],
    ));
    assert_eq!(page.summary().result_count, Some(0));

    page.dispatch(PageEvent::RemoveChip(FilterKey::Category));
    assert_eq!(page.summary().result_ids, vec![2, 6, 10, 14]);

    page.dispatch(PageEvent::ClearFilters);
    assert_eq!(page.summary().result_count, Some(16));
    assert_eq!(page.summary().search_term, "");
}
