//! Application context for the Notes CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use notes_core::{LoadReport, NoteStore};

use crate::cli::Cli;
use crate::config::NotesConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_notes_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NotesConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<&NotesConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Log level from the config file, if one is set.
    pub fn log_level(&self) -> Option<&str> {
        self.config().ok().and_then(|c| c.log.level.as_deref())
    }

    /// Resolved path of the notes file.
    pub fn notes_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_notes_path(self.cli, self.config()?))
    }

    /// Open and load the notes file.
    pub fn open_store(&self) -> anyhow::Result<(NoteStore, LoadReport)> {
        let path = self.notes_path()?;
        debug!(path = %path.display(), "opening notes file");
        Ok(NoteStore::open(path))
    }

    /// Build a UI context for one command's output.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
