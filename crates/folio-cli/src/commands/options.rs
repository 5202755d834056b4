use folio_core::enums::FilterKey;
use folio_search::adapters::options;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OptionsArgs;
use crate::output::output;

/// One selector entry, flattened for table output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRow {
    pub key: FilterKey,
    /// `None` for the "All ..." entry.
    pub value: Option<&'static str>,
    pub label: &'static str,
}

/// Handle `folio options`.
pub fn handle(args: &OptionsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&option_rows(args.key), flags.format)
}

fn option_rows(key: Option<FilterKey>) -> Vec<OptionRow> {
    let keys = key.map_or_else(|| FilterKey::ALL.to_vec(), |key| vec![key]);
    keys.into_iter()
        .flat_map(options)
        .map(|option| OptionRow {
            key: option.key,
            value: option.value.map(|value| value.as_str()),
            label: option.label,
        })
        .collect()
}
