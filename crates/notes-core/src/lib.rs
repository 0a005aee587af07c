//! # Notes Core
//!
//! Core library for Notes - a local, single-user note manager backed by a
//! plain text file.
//!
//! This crate provides the note model, its line encoding, the storage
//! backend abstraction and the `NoteStore` that owns the collection,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **note**: The `Note` record and its `|||`-delimited line format
//! - **storage**: Storage backend trait and the flat-file implementation
//! - **store**: Create/read/update/delete over the in-memory collection,
//!   re-persisted after every mutation

pub mod error;
pub mod fs;
pub mod note;
pub mod storage;
pub mod store;

pub use error::{NotesError, Result};
pub use note::{Note, NoteUpdate};
pub use storage::{FlatFileStorage, NoteStorage, DEFAULT_NOTES_FILE};
pub use store::{LoadReport, NoteStore, Saved};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
