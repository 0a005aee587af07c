use notes_core::NoteStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_note_id;
use crate::output::{note_json, print_note};

pub fn handle_show(ctx: &AppContext, store: &NoteStore, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_note_id(&args.id)?;
    let note = store
        .find_by_id(id)
        .ok_or_else(|| CliError::note_not_found(id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&note_json(note)?)?);
    } else {
        print_note(&ctx.ui_context(false, None), note);
    }
    Ok(())
}
