pub mod list;
pub mod options;
pub mod schema;
pub mod shared;
pub mod shell;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list::handle(args, ctx, flags),
        Commands::Shell => shell::handle(ctx, flags),
        Commands::Options(_) | Commands::Schema => {
            unreachable!("options/schema are pre-dispatched in main")
        }
    }
}
