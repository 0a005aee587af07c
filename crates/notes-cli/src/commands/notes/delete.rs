use notes_core::NoteStore;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{confirm_delete, parse_note_id};
use crate::output::{print_note, report_save_error};
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_delete(
    ctx: &AppContext,
    store: &mut NoteStore,
    args: &DeleteArgs,
) -> anyhow::Result<()> {
    let id = parse_note_id(&args.id)?;
    let note = store
        .find_by_id(id)
        .ok_or_else(|| CliError::note_not_found(id))?;

    let ui_ctx = ctx.ui_context(false, None);

    if !args.force {
        print_note(&ui_ctx, note);
        if !confirm_delete()? {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Deletion cancelled."));
                }
                OutputMode::Plain | OutputMode::Json => println!("Deletion cancelled."),
            }
            return Ok(());
        }
    }

    let (deleted, saved) = store.delete(id).into_parts();
    if let Err(err) = saved {
        report_save_error(&ui_ctx, &err);
    }
    if !deleted {
        return Err(CliError::note_not_found(id).into());
    }

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Note deleted successfully!"));
            }
            OutputMode::Plain | OutputMode::Json => println!("Note deleted successfully!"),
        }
    }
    Ok(())
}
