use folio_core::enums::FilterKey;
use folio_search::page::{PageEvent, ResearchPage};
use folio_search::render::EMPTY_MESSAGE;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::parse::parse_option;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = run_query(args, ctx)?;

    if args.summary {
        return output(&page.summary(), flags.format);
    }

    let items = page.results().items().unwrap_or_default();
    if items.is_empty() && !flags.quiet {
        eprintln!("{EMPTY_MESSAGE}");
    }
    output(&items, flags.format)
}

/// Mount a page and drive it the way the live filter sheet would.
fn run_query(args: &ListArgs, ctx: &AppContext) -> anyhow::Result<ResearchPage> {
    let mut page = ctx.mount_page();

    if let Some(term) = &args.search {
        page.dispatch(PageEvent::Search(term.clone()));
    }

    let choices = [
        (FilterKey::Category, args.category.as_deref()),
        (FilterKey::Format, args.file_format.as_deref()),
        (FilterKey::DateRange, args.date_range.as_deref()),
    ];
    for (key, raw) in choices {
        if let Some(raw) = raw {
            let option = parse_option(key, raw)?;
            page.dispatch(PageEvent::SheetSelect(option));
        }
    }

    Ok(page)
}
