//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying notes
//! in various formats (JSON, table, plain text), plus the load and
//! save status lines every command shares.

mod json;
mod text;

pub use json::{note_json, notes_json};
pub use text::{print_note, print_note_list, report_load, report_save_error};
