use notes_core::{NoteStore, NoteUpdate};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{parse_note_id, prompt_optional, read_note_body, stdin_is_interactive};
use crate::output::report_save_error;
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, store: &mut NoteStore, args: &EditArgs) -> anyhow::Result<()> {
    let id = parse_note_id(&args.id)?;
    let current = store
        .find_by_id(id)
        .ok_or_else(|| CliError::note_not_found(id))?;

    let mut changes = NoteUpdate {
        title: trimmed(args.title.as_deref()),
        content: args.content.clone().filter(|content| !content.trim().is_empty()),
        category: trimmed(args.category.as_deref()),
    };

    let no_flags =
        changes.title.is_none() && changes.content.is_none() && changes.category.is_none();
    if no_flags && !args.no_input && stdin_is_interactive() {
        changes.title = prompt_optional("New title", current.title())?;
        changes.category = prompt_optional("New category", current.category())?;
        eprintln!("Leave the content empty to keep it.");
        changes.content = Some(read_note_body(false, None)?).filter(|c| !c.trim().is_empty());
    }

    if changes.is_noop() {
        return Err(CliError::invalid_input(
            "Nothing to update: pass --title, --content or --category",
        )
        .into());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let (updated, saved) = store.update(id, &changes).into_parts();
    if let Err(err) = saved {
        report_save_error(&ui_ctx, &err);
    }
    if !updated {
        return Err(CliError::note_not_found(id).into());
    }

    if !ctx.quiet() {
        let id_text = id.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Note updated successfully!", &[("ID", &id_text)]),
        );
    }
    Ok(())
}

/// Blank flag values mean "keep the current field".
fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
