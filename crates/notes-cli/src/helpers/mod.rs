//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Title prompts, multi-line body entry and confirmations (`input`)
//! - Note ID and output format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{
    confirm_delete, is_yes, prompt_optional, prompt_title, read_multiline_until, read_note_body,
    stdin_is_interactive,
};
pub use parsing::{parse_note_id, parse_output_format};
