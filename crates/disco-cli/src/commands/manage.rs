use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::navigator::{DialoguerPrompter, Exit, Navigator, SystemEditor};
use crate::ui;

/// Run the interactive manager until the operator exits.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let editor_env = std::env::var("EDITOR").ok();
    let editor = SystemEditor::new(ctx.config.editor.resolve(editor_env.as_deref()));
    tracing::debug!(project = ?flags.project, root = %ctx.project_root.display(), "starting manager");

    let mut navigator = Navigator::new(ctx.unit_roots(), DialoguerPrompter::new(), editor);
    let exit = navigator.run().context("interactive session ended unexpectedly")?;

    match exit {
        Exit::Quit => ui::info("Goodbye! 👋"),
        Exit::CreateNew => ui::info(
            "The creation wizard runs separately; start it from your bot project to add a command or event.",
        ),
    }
    Ok(())
}
