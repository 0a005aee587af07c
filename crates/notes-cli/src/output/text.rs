//! Text and table output formatting for notes.

use notes_core::{LoadReport, Note, NotesError};

use crate::ui::format::{preview, single_line, truncate};
use crate::ui::theme::{styled, styles};
use crate::ui::{
    badge, blank_line, header, kv, print, simple_table, Badge, Column, OutputMode, UiContext,
};

const TITLE_WIDTH: usize = 40;
const PREVIEW_WIDTH: usize = 30;

/// Print a single note in full.
pub fn print_note(ui: &UiContext, note: &Note) {
    match ui.mode {
        OutputMode::Pretty => {
            let id = styled(&format!("[ID: {}]", note.id()), styles::dim(), ui.color);
            let title = styled(note.title(), styles::bold(), ui.color);
            print(ui, &format!("{} {}", id, title));
            print(ui, &kv(ui, "Category", note.category()));
            print(ui, &kv(ui, "Created", note.timestamp()));
            let rule = if ui.unicode { "\u{2500}" } else { "-" };
            print(ui, &rule.repeat(ui.width.clamp(20, 60)));
            print(ui, note.content());
        }
        OutputMode::Plain => print(ui, &note.format_full()),
        OutputMode::Json => {}
    }
}

/// Print a list of notes, optionally scoped to a category search.
///
/// Plain mode prints one brief line per note; pretty mode renders a table.
pub fn print_note_list(ui: &UiContext, notes: &[&Note], category: Option<&str>, quiet: bool) {
    if notes.is_empty() {
        let message = match category {
            Some(c) => format!("No notes found in category: {}", c),
            None => "No notes available.".to_string(),
        };
        match ui.mode {
            OutputMode::Pretty => print(ui, &badge(ui, Badge::Info, &message)),
            _ => print(ui, &message),
        }
        return;
    }

    let footer = match category {
        Some(_) => format!("Results: {}", notes.len()),
        None => format!("Total Notes: {}", notes.len()),
    };

    match ui.mode {
        OutputMode::Pretty => {
            if !quiet {
                print(ui, &header(ui, "list", category));
                blank_line(ui);
            }
            let columns = [
                Column::new("ID"),
                Column::new("TITLE"),
                Column::new("CATEGORY"),
                Column::new("CREATED"),
                Column::new("PREVIEW"),
            ];
            let rows: Vec<Vec<String>> = notes
                .iter()
                .map(|note| {
                    vec![
                        note.id().to_string(),
                        truncate(&single_line(note.title()), TITLE_WIDTH),
                        note.category().to_string(),
                        note.timestamp().to_string(),
                        preview(note.content(), PREVIEW_WIDTH),
                    ]
                })
                .collect();
            print(ui, &simple_table(ui, &columns, &rows));
            if !quiet {
                blank_line(ui);
                print(ui, &styled(&footer, styles::dim(), ui.color));
            }
        }
        OutputMode::Plain => {
            if !quiet {
                match category {
                    Some(c) => {
                        print(ui, &format!("--- NOTES IN CATEGORY: {} ---", c.to_uppercase()));
                    }
                    None => print(ui, "ALL NOTES"),
                }
            }
            for note in notes {
                print(ui, &note.format_brief());
            }
            if !quiet {
                print(ui, &footer);
            }
        }
        OutputMode::Json => {}
    }
}

/// Report how loading the notes file went.
///
/// Status lines go to stderr so stdout stays clean for command output.
/// Read errors are shown even in quiet mode.
pub fn report_load(ui: &UiContext, report: &LoadReport, quiet: bool) {
    if let Some(err) = &report.error {
        eprintln!(
            "{}",
            warning(ui, &format!("Error reading notes file: {}", err))
        );
    }
    if quiet {
        return;
    }
    if !report.found {
        eprintln!("No existing notes file found. Starting fresh.");
        return;
    }
    if report.error.is_none() {
        eprintln!("Loaded {} notes from file.", report.loaded);
    }
    if report.skipped > 0 {
        eprintln!(
            "{}",
            warning(
                ui,
                &format!("Skipped {} malformed line(s) in notes file.", report.skipped)
            )
        );
    }
}

/// Report a failed save. The in-memory change stands.
pub fn report_save_error(ui: &UiContext, err: &NotesError) {
    eprintln!("{}", warning(ui, &format!("Error saving notes: {}", err)));
}

fn warning(ui: &UiContext, message: &str) -> String {
    if ui.mode.is_pretty() {
        badge(ui, Badge::Warn, message)
    } else {
        message.to_string()
    }
}
