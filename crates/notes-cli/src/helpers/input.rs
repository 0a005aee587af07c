//! Interactive and piped input for note fields.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use crate::constants::CONTENT_SENTINEL;
use crate::errors::CliError;

/// Whether stdin is attached to a terminal.
pub fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Read lines until one equals `sentinel` (or EOF), joined with `\n`.
///
/// The sentinel line itself is not part of the result.
pub fn read_multiline_until<R: BufRead>(reader: &mut R, sentinel: &str) -> io::Result<String> {
    let mut lines = Vec::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        if line == sentinel {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

/// Title from the flag, or prompted for on a TTY.
pub fn prompt_title(no_input: bool, title: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = title {
        return Ok(value);
    }
    if no_input || !stdin_is_interactive() {
        return Err(CliError::invalid_input(
            "--title is required when not running interactively",
        )
        .into());
    }
    Input::<String>::new()
        .with_prompt("Enter title")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read title: {}", e))
}

/// Read the note body from `--body`, stdin, or a terminal prompt.
///
/// Both stdin and the prompt stop at a line containing only `END`.
pub fn read_note_body(no_input: bool, body: Option<String>) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        if no_input {
            return Err(CliError::invalid_input("--no-input requires content from stdin").into());
        }
        eprintln!(
            "Enter content (type '{}' on a new line to finish):",
            CONTENT_SENTINEL
        );
    }

    read_multiline_until(&mut stdin.lock(), CONTENT_SENTINEL)
        .map_err(|e| anyhow::anyhow!("Failed to read content: {}", e))
}

/// Prompt for an optional replacement value; blank keeps the current one.
pub fn prompt_optional(label: &str, current: &str) -> anyhow::Result<Option<String>> {
    let value = Input::<String>::new()
        .with_prompt(format!("{} [{}]", label, current))
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label.to_lowercase(), e))?;
    Ok(Some(value.trim().to_string()).filter(|v| !v.is_empty()))
}

/// Ask the delete question; only `yes` (any case) confirms.
pub fn confirm_delete() -> anyhow::Result<bool> {
    const PROMPT: &str = "Are you sure you want to delete? (yes/no)";

    let answer = if stdin_is_interactive() {
        Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?
    } else {
        eprintln!("{}", PROMPT);
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line
    };
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
