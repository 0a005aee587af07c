use notes_core::{Note, NoteStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::{notes_json, print_note_list};

pub fn handle_list(ctx: &AppContext, store: &NoteStore, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, format.map(|f| f.as_str()));

    let category = args.category.as_deref();
    let notes: Vec<&Note> = match category {
        Some(c) => store.search_by_category(c),
        None => store.list_all().iter().collect(),
    };

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(&notes)?)?);
        return Ok(());
    }

    print_note_list(&ui_ctx, &notes, category, ctx.quiet());
    Ok(())
}
