//! Path resolution for config and notes files.

use std::path::PathBuf;

use notes_core::DEFAULT_NOTES_FILE;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, NotesConfig};

/// Resolve the config file path, checking NOTES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("NOTES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if there is one; a missing file means defaults.
pub fn load_config() -> anyhow::Result<NotesConfig> {
    let config_path = match resolve_config_path() {
        Ok(path) => path,
        Err(_) => return Ok(NotesConfig::default()),
    };
    if !config_path.exists() {
        return Ok(NotesConfig::default());
    }
    read_config(&config_path)
}

/// Resolve the notes file: `--file`/`NOTES_FILE`, then config, then
/// `notes.txt` in the working directory.
pub fn resolve_notes_path(cli: &Cli, config: &NotesConfig) -> PathBuf {
    if let Some(path) = cli.file.as_ref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = config
        .storage
        .path
        .as_ref()
        .filter(|p| !p.trim().is_empty())
    {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_NOTES_FILE)
}
