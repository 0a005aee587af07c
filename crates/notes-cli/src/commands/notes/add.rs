use dialoguer::Input;

use notes_core::NoteStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_title, read_note_body, stdin_is_interactive};
use crate::output::report_save_error;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, store: &mut NoteStore, args: &AddArgs) -> anyhow::Result<()> {
    let prompting = args.title.is_none() && !args.no_input && stdin_is_interactive();

    let title = prompt_title(args.no_input, args.title.clone())?;
    let title = title.trim();
    if title.is_empty() {
        return Err(CliError::invalid_input("Title cannot be empty").into());
    }

    let category = match &args.category {
        Some(c) => c.trim().to_string(),
        None if prompting => Input::<String>::new()
            .with_prompt("Enter category (e.g., Personal, Work, Study)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))?
            .trim()
            .to_string(),
        None => String::new(),
    };

    let content = read_note_body(args.no_input, args.body.clone())?;
    if content.trim().is_empty() {
        return Err(CliError::invalid_input("Content cannot be empty").into());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let (note, saved) = store.create(title, &content, &category)?.into_parts();
    if let Err(err) = saved {
        report_save_error(&ui_ctx, &err);
    }

    if !ctx.quiet() {
        let message = format!("Note added successfully with ID: {}", note.id());
        match ui_ctx.mode {
            OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &message)),
            OutputMode::Plain | OutputMode::Json => println!("{}", message),
        }
    }
    Ok(())
}
