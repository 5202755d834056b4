use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - research library search and filters")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog JSON file (overrides `catalog.path`)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

impl Cli {
    /// Resolve global flags, falling back to the configured output format.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(default_format, true).unwrap_or_else(|_| {
                tracing::warn!(
                    value = default_format,
                    "unknown general.default_format, using json"
                );
                OutputFormat::Json
            })
        });

        GlobalFlags {
            format,
            quiet: self.quiet,
            catalog: self.catalog.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use folio_core::enums::FilterKey;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "table", "--verbose", "schema"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "shell", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn format_falls_back_to_configured_default() {
        let cli = Cli::try_parse_from(["folio", "schema"]).expect("cli should parse");
        assert_eq!(cli.global_flags("table").format, OutputFormat::Table);
        assert_eq!(cli.global_flags("TABLE").format, OutputFormat::Table);
        assert_eq!(cli.global_flags("yaml").format, OutputFormat::Json);
    }

    #[test]
    fn explicit_format_beats_configured_default() {
        let cli = Cli::try_parse_from(["folio", "-f", "raw", "schema"]).expect("cli should parse");
        assert_eq!(cli.global_flags("table").format, OutputFormat::Raw);
    }

    #[test]
    fn catalog_flag_is_copied_into_global_flags() {
        let cli = Cli::try_parse_from(["folio", "--catalog", "/tmp/items.json", "list"])
            .expect("cli should parse");
        let flags = cli.global_flags("json");
        assert_eq!(flags.catalog.as_deref(), Some(Path::new("/tmp/items.json")));
    }

    #[test]
    fn list_accepts_every_filter_flag() {
        let cli = Cli::try_parse_from([
            "folio",
            "list",
            "--search",
            "image",
            "--category",
            "nature",
            "--format",
            "table",
            "--file-format",
            "svg",
            "--date-range",
            "last-year",
        ])
        .expect("cli should parse");

        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.search.as_deref(), Some("image"));
        assert_eq!(args.category.as_deref(), Some("nature"));
        assert_eq!(args.file_format.as_deref(), Some("svg"));
        assert_eq!(args.date_range.as_deref(), Some("last-year"));
        assert_eq!(cli.format, Some(OutputFormat::Table));
    }

    #[test]
    fn options_key_is_optional() {
        let all = Cli::try_parse_from(["folio", "options"]).expect("cli should parse");
        assert!(matches!(all.command, Commands::Options(ref args) if args.key.is_none()));

        let one = Cli::try_parse_from(["folio", "options", "date"]).expect("cli should parse");
        let Commands::Options(args) = one.command else {
            panic!("expected options");
        };
        assert_eq!(args.key, Some(FilterKey::DateRange));
    }

    #[test]
    fn options_rejects_unknown_key() {
        assert!(Cli::try_parse_from(["folio", "options", "colour"]).is_err());
    }
}
