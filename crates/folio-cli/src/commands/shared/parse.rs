use anyhow::Context;
use folio_core::enums::FilterKey;
use folio_core::filters::FilterValue;
use folio_search::adapters::{SelectOption, options};

/// Resolve a user-typed selector choice. `all` picks the "no filter" sentinel.
pub fn parse_option(key: FilterKey, raw: &str) -> anyhow::Result<SelectOption> {
    let raw = raw.trim();
    let value = if raw.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(FilterValue::parse(key, raw)?)
    };

    options(key)
        .into_iter()
        .find(|option| option.value == value)
        .with_context(|| format!("no {key} option for '{raw}'"))
}

/// Parse a filter key (`category`, `format`, `date-range`).
pub fn parse_key(raw: &str) -> anyhow::Result<FilterKey> {
    raw.trim().parse::<FilterKey>().map_err(anyhow::Error::from)
}
