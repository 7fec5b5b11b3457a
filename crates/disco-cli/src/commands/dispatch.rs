use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler; no subcommand starts the
/// interactive manager.
pub fn dispatch(
    command: Option<Commands>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        None => commands::manage::handle(ctx, flags),
        Some(Commands::Check(args)) => commands::check::handle(&args, ctx),
    }
}
