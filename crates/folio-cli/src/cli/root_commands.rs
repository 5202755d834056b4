use clap::{Args, Subcommand};
use folio_core::enums::FilterKey;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Filter the catalog once and print the matching items.
    List(ListArgs),
    /// Print the selector options for one or every filter.
    Options(OptionsArgs),
    /// Interactive page session over stdin.
    Shell,
    /// Print the JSON Schema of the catalog file format.
    Schema,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against title and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category filter (Architecture, Product, Nature, Abstract, all)
    #[arg(long)]
    pub category: Option<String>,

    /// File format filter (JPG, PNG, SVG, TIFF, all)
    #[arg(long = "file-format")]
    pub file_format: Option<String>,

    /// Date range filter (last-week, last-month, last-year, all)
    #[arg(long)]
    pub date_range: Option<String>,

    /// Print the page summary instead of the item list
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Debug, Args)]
pub struct OptionsArgs {
    /// Filter key: category, format, date-range
    pub key: Option<FilterKey>,
}
