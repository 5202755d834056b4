use folio_core::entities::ResearchItem;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `folio schema`: the JSON Schema of a catalog file.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(Vec<ResearchItem>);
    // A schema is only useful as JSON.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema, format)
}
