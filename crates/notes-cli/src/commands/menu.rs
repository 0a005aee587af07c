//! The numbered interactive menu.
//!
//! Reads choices and field values line by line from any `BufRead`, so the
//! same loop serves a terminal, piped stdin and tests.

use std::io::{self, BufRead, Write};

use notes_core::{NoteStorage, NoteStore, NoteUpdate};

use crate::app::AppContext;
use crate::constants::CONTENT_SENTINEL;
use crate::helpers::{is_yes, read_multiline_until};
use crate::output::report_save_error;
use crate::ui::UiContext;

const MENU_WIDTH: usize = 60;
const LIST_WIDTH: usize = 80;

pub fn handle_menu(ctx: &AppContext, store: &mut NoteStore) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(store, stdin.lock(), stdout.lock(), ui_ctx).run()?;
    Ok(())
}

/// One menu session over a store.
pub struct Menu<'a, S: NoteStorage, R, W> {
    store: &'a mut NoteStore<S>,
    input: R,
    out: W,
    ui: UiContext,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: NoteStorage,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut NoteStore<S>, input: R, out: W, ui: UiContext) -> Self {
        Self {
            store,
            input,
            out,
            ui,
        }
    }

    /// Run until the user picks 0 or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "          NOTES MANAGER APPLICATION            ")?;
        loop {
            self.show_main_menu()?;
            let Some(choice) = self.read_int("\nEnter your choice: ")? else {
                break;
            };
            match choice {
                1 => self.create_note()?,
                2 => self.view_all()?,
                3 => self.view_by_id()?,
                4 => self.update_note()?,
                5 => self.delete_note()?,
                6 => self.search_by_category()?,
                0 => {
                    writeln!(self.out, "\nThank you for using Notes Manager!")?;
                    break;
                }
                _ => writeln!(self.out, "\nInvalid choice! Please try again.")?,
            }
        }
        self.out.flush()
    }

    fn show_main_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(MENU_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "                    MAIN MENU")?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Press 1 for Create New Note")?;
        writeln!(self.out, "Press 2 for View All Notes")?;
        writeln!(self.out, "Press 3 for View Note by ID")?;
        writeln!(self.out, "Press 4 for Update Note")?;
        writeln!(self.out, "Press 5 for Delete Note")?;
        writeln!(self.out, "Press 6 for Search by Category")?;
        writeln!(self.out, "Press 0 for Exit")
    }

    fn create_note(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- CREATE NEW NOTE ---")?;

        let Some(title) = self.read_text("Enter note title: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            return writeln!(self.out, "Title cannot be empty!");
        }

        let category = self
            .read_text("Enter category (e.g., Personal, Work, Study): ")?
            .unwrap_or_default();

        let content = self.read_content("Enter note content")?;
        if content.trim().is_empty() {
            return writeln!(self.out, "Content cannot be empty!");
        }

        let (note, saved) = match self.store.create(&title, &content, &category) {
            Ok(created) => created.into_parts(),
            Err(err) => return writeln!(self.out, "Error: {}", err),
        };
        self.report_saved(saved);
        writeln!(self.out, "Note added successfully with ID: {}", note.id())
    }

    fn view_all(&mut self) -> io::Result<()> {
        let notes = self.store.list_all();
        if notes.is_empty() {
            return writeln!(self.out, "No notes available.");
        }

        let rule = "-".repeat(LIST_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "ALL NOTES\n")?;
        for note in notes {
            writeln!(self.out, "{}", note.format_brief())?;
        }
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Total Notes: {}", notes.len())
    }

    fn view_by_id(&mut self) -> io::Result<()> {
        let Some(id) = self.read_int("\nEnter note ID: ")? else {
            return Ok(());
        };
        self.show_note(id)?;
        Ok(())
    }

    fn update_note(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- UPDATE NOTE ---")?;

        let Some(id) = self.read_int("Enter note ID to update: ")? else {
            return Ok(());
        };
        let Some(id) = self.show_note(id)? else {
            return Ok(());
        };

        writeln!(self.out, "\nWhat do you want to update?")?;
        writeln!(self.out, "Press 1 for Title")?;
        writeln!(self.out, "Press 2 for Content")?;
        writeln!(self.out, "Press 3 for Category")?;
        writeln!(self.out, "Press 4 for All")?;

        let Some(choice) = self.read_int("\nEnter choice: ")? else {
            return Ok(());
        };

        let mut changes = NoteUpdate::new();
        match choice {
            1 => changes.title = self.read_text("Enter new title: ")?,
            2 => changes.content = Some(self.read_content("Enter new content")?),
            3 => changes.category = self.read_text("Enter new category: ")?,
            4 => {
                changes.title = self.read_text("Enter new title: ")?;
                changes.category = self.read_text("Enter new category: ")?;
                changes.content = Some(self.read_content("Enter new content")?);
            }
            _ => return writeln!(self.out, "Invalid choice!"),
        }

        let (updated, saved) = self.store.update(id, &changes).into_parts();
        self.report_saved(saved);
        if updated {
            writeln!(self.out, "Note updated successfully!")
        } else {
            writeln!(self.out, "Note with ID {} not found!", id)
        }
    }

    fn delete_note(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- DELETE NOTE ---")?;

        let Some(id) = self.read_int("Enter note ID to delete: ")? else {
            return Ok(());
        };
        let Some(id) = self.show_note(id)? else {
            return Ok(());
        };

        let answer = self
            .read_text("\nAre you sure you want to delete? (yes/no): ")?
            .unwrap_or_default();
        if !is_yes(&answer) {
            return writeln!(self.out, "Deletion cancelled.");
        }

        let (deleted, saved) = self.store.delete(id).into_parts();
        self.report_saved(saved);
        if deleted {
            writeln!(self.out, "Note deleted successfully!")
        } else {
            writeln!(self.out, "Note with ID {} not found!", id)
        }
    }

    fn search_by_category(&mut self) -> io::Result<()> {
        let Some(category) = self.read_text("\nEnter category to search: ")? else {
            return Ok(());
        };

        let results = self.store.search_by_category(&category);
        if results.is_empty() {
            return writeln!(self.out, "No notes found in category: {}", category);
        }

        writeln!(
            self.out,
            "\n--- NOTES IN CATEGORY: {} ---",
            category.to_uppercase()
        )?;
        for note in &results {
            writeln!(self.out, "{}", note.format_brief())?;
        }
        writeln!(self.out, "\nResults: {}", results.len())
    }

    /// Print the note with `id`, returning its id when it exists.
    fn show_note(&mut self, id: i64) -> io::Result<Option<u32>> {
        let found = u32::try_from(id)
            .ok()
            .and_then(|id| self.store.find_by_id(id));
        match found {
            Some(note) => {
                writeln!(self.out, "{}", note.format_full())?;
                Ok(Some(note.id()))
            }
            None => {
                writeln!(self.out, "Note with ID {} not found!", id)?;
                Ok(None)
            }
        }
    }

    fn report_saved(&self, saved: notes_core::Result<()>) {
        if let Err(err) = saved {
            report_save_error(&self.ui, &err);
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Next input line without its line ending, or `None` at EOF.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Prompt until the user types a whole number; `None` at EOF.
    fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.out, "Invalid input! Please enter a number.")?,
            }
        }
    }

    fn read_content(&mut self, label: &str) -> io::Result<String> {
        writeln!(
            self.out,
            "{} (type '{}' on a new line to finish):",
            label, CONTENT_SENTINEL
        )?;
        self.out.flush()?;
        read_multiline_until(&mut self.input, CONTENT_SENTINEL)
    }
}
