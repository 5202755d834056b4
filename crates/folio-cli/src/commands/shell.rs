//! `folio shell`: a line-oriented page session.
//!
//! Each input line becomes one [`PageEvent`]. After every event the shell
//! prints the sheet/panel state, the chip bar and the result view.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::bail;
use folio_core::enums::FilterKey;
use folio_core::filters::FilterValue;
use folio_search::adapters::{active_chips, options};
use folio_search::page::{PageEvent, ResearchPage};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_key, parse_option};
use crate::context::AppContext;

const HELP: &str = "\
commands:
  search <text>                 set the search term (no text clears it)
  sheet open|close|reset        filter sheet, selections apply live
  sheet set <key> <value|all>
  panel show|hide|toggle|close  filter panel, selections wait for apply
  panel set <key> <value|all>
  panel apply|reset
  chip remove <key>             drop one active filter
  chip clear                    drop every active filter
  clear                         clear search and filters
  show | help | quit
keys: category, format, date-range";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Event(PageEvent),
    Show,
    Help,
    Quit,
}

/// Handle `folio shell`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut page = ctx.mount_page();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut page, stdin.lock(), &mut stdout.lock(), !flags.quiet)
}

/// Drive `page` from `input` until EOF or `quit`.
pub fn run_session<R, W>(
    page: &mut ResearchPage,
    input: R,
    out: &mut W,
    prompt: bool,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", screen(page))?;
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "folio> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };

        match parse_line(&line?) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(ShellCommand::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(ShellCommand::Show)) => writeln!(out, "{}", screen(page))?,
            Ok(Some(ShellCommand::Event(event))) => {
                page.dispatch(event);
                writeln!(out, "{}", screen(page))?;
            }
            Err(error) => writeln!(out, "error: {error:#}")?,
        }
    }

    Ok(())
}

/// Parse one input line. Blank lines yield `None`.
///
/// The text after `search` and its single separator is kept verbatim, inner
/// and trailing whitespace included.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let raw = line.trim_end_matches(['\r', '\n']).trim_start();
    if raw.trim_end().is_empty() {
        return Ok(None);
    }

    let (command, tail) = raw
        .split_once(char::is_whitespace)
        .map_or((raw.trim_end(), ""), |(command, _)| {
            (command, &raw[command.len()..])
        });
    let args: Vec<&str> = tail.split_whitespace().collect();
    let line = raw.trim_end();

    let parsed = match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("search", _) => {
            let term = tail.strip_prefix(char::is_whitespace).unwrap_or(tail);
            ShellCommand::Event(PageEvent::Search(term.to_string()))
        }
        ("sheet", ["open"]) => ShellCommand::Event(PageEvent::SheetOpen),
        ("sheet", ["close"]) => ShellCommand::Event(PageEvent::SheetClose),
        ("sheet", ["reset"]) => ShellCommand::Event(PageEvent::SheetReset),
        ("sheet", ["set", key, value]) => {
            let option = parse_option(parse_key(key)?, value)?;
            ShellCommand::Event(PageEvent::SheetSelect(option))
        }
        ("panel", ["show"]) => ShellCommand::Event(PageEvent::PanelShow),
        ("panel", ["hide" | "close"]) => ShellCommand::Event(PageEvent::PanelHide),
        ("panel", ["toggle"]) => ShellCommand::Event(PageEvent::PanelToggle),
        ("panel", ["apply"]) => ShellCommand::Event(PageEvent::PanelApply),
        ("panel", ["reset"]) => ShellCommand::Event(PageEvent::PanelReset),
        ("panel", ["set", key, value]) => {
            let option = parse_option(parse_key(key)?, value)?;
            ShellCommand::Event(PageEvent::PanelSelect(option))
        }
        ("chip", ["remove", key]) => ShellCommand::Event(PageEvent::RemoveChip(parse_key(key)?)),
        ("chip", ["clear"]) => ShellCommand::Event(PageEvent::ClearChips),
        ("clear", []) => ShellCommand::Event(PageEvent::ClearFilters),
        ("show", []) => ShellCommand::Show,
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        ("sheet" | "panel" | "chip", _) => {
            bail!("invalid arguments for '{command}' (try 'help')")
        }
        _ => bail!("unknown command '{line}' (try 'help')"),
    };

    Ok(Some(parsed))
}

/// Text rendering of the whole page.
fn screen(page: &ResearchPage) -> String {
    let mut out = String::new();
    let store = page.store();

    if !store.search_term().is_empty() {
        let _ = writeln!(out, "search: \"{}\"", store.search_term());
    }
    if page.sheet().is_open() {
        let _ = writeln!(out, "sheet: open");
        for key in FilterKey::ALL {
            let _ = writeln!(out, "  {}", selector_line(page, key));
        }
    }
    if page.panel().is_visible() {
        let draft = active_chips(page.panel().draft())
            .into_iter()
            .map(|chip| chip.label)
            .collect::<Vec<_>>();
        let pending = if page.panel().has_pending_changes(store) {
            " (not applied)"
        } else {
            ""
        };
        let draft = if draft.is_empty() {
            String::from("none")
        } else {
            draft.join(", ")
        };
        let _ = writeln!(out, "panel: {draft}{pending}");
    }

    let chips = page.chips();
    if !chips.is_empty() {
        let labels = chips
            .iter()
            .map(|chip| format!("[{} x]", chip.label))
            .collect::<Vec<_>>();
        let _ = writeln!(out, "filters: {} [Clear All]", labels.join(" "));
    }

    out.push_str(&page.view().to_text());
    out
}

/// One sheet selector: the current value, then every option with the selected
/// one in brackets.
fn selector_line(page: &ResearchPage, key: FilterKey) -> String {
    let filters = page.store().filters();
    let current = page
        .sheet()
        .selected(page.store(), key)
        .map_or(key.all_label(), FilterValue::label);
    let choices = options(key)
        .into_iter()
        .map(|option| {
            if option.is_selected(filters) {
                format!("[{}]", option.label)
            } else {
                option.label.to_string()
            }
        })
        .collect::<Vec<_>>();
    format!("{}: {current} | {}", key.chip_prefix(), choices.join(" "))
}
