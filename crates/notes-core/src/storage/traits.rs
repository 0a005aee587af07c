//! Storage backend trait definition.

use crate::error::{NotesError, Result};
use crate::note::Note;

/// Notes recovered by a single read of the backing store.
#[derive(Debug, Default)]
pub struct ReadBatch {
    /// Decoded notes, in persisted order
    pub notes: Vec<Note>,

    /// Non-blank lines that did not decode
    pub skipped: usize,

    /// I/O failure that cut the read short; `notes` holds what came before it
    pub error: Option<NotesError>,
}

/// Backend that persists the full note collection.
///
/// All implementations must ensure:
/// - A missing store reads as `Ok(None)`, not as an error
/// - Malformed records are skipped and counted, never fatal
/// - `write_notes` replaces everything previously persisted
/// - No handle to the backing resource outlives a single call
pub trait NoteStorage {
    /// Read every persisted note.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if nothing has been persisted yet, otherwise the batch.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Storage` if the store exists but cannot be
    /// opened at all. Failures after reading has started are carried in
    /// [`ReadBatch::error`] instead.
    fn read_notes(&self) -> Result<Option<ReadBatch>>;

    /// Replace the persisted collection with `notes`, in order.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Storage` if the write does not complete.
    fn write_notes(&mut self, notes: &[Note]) -> Result<()>;

    /// Human-readable location, used in log events and messages.
    fn location(&self) -> String;
}
