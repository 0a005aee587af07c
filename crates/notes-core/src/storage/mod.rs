//! Storage abstraction for Notes.
//!
//! This module defines the `NoteStorage` trait and the flat-file backend
//! that implements it.
//!
//! ## Architecture
//!
//! The store never touches the filesystem directly; it reads and rewrites
//! its whole collection through a `NoteStorage`:
//! - `FlatFileStorage`: one `|||`-delimited line per note (the default)
//!
//! Backends are responsible for:
//! - Skipping lines they cannot decode instead of failing the load
//! - Keeping whatever was read before an I/O error
//! - Replacing the persisted collection as a whole on write

pub mod flat_file;
pub mod traits;

// Re-export public types
pub use flat_file::{FlatFileStorage, DEFAULT_NOTES_FILE};
pub use traits::{NoteStorage, ReadBatch};
