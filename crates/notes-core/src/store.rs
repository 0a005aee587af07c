//! In-memory note collection with write-through persistence.
//!
//! `NoteStore` owns every `Note` and the id allocator. It loads once on
//! construction and rewrites the whole backing store after each mutation.
//! A failed rewrite is reported through [`Saved`] but never undoes the
//! in-memory change, so memory and disk can differ until the next
//! successful save.

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{NotesError, Result};
use crate::note::{format_timestamp, Note, NoteUpdate, DEFAULT_CATEGORY};
use crate::storage::{FlatFileStorage, NoteStorage};

/// Outcome of loading the backing store.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Whether the backing file existed
    pub found: bool,

    /// Notes added to the collection
    pub loaded: usize,

    /// Non-blank lines that were not valid notes
    pub skipped: usize,

    /// Read failure; the collection holds whatever came before it
    pub error: Option<NotesError>,
}

/// Value of a mutating operation together with the result of the save
/// that followed it.
#[derive(Debug)]
#[must_use]
pub struct Saved<T> {
    value: T,
    save_error: Option<NotesError>,
}

impl<T> Saved<T> {
    fn new(value: T, saved: Result<()>) -> Self {
        Self {
            value,
            save_error: saved.err(),
        }
    }

    fn unsaved(value: T) -> Self {
        Self {
            value,
            save_error: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn save_error(&self) -> Option<&NotesError> {
        self.save_error.as_ref()
    }

    /// Split into the value and the save outcome.
    pub fn into_parts(self) -> (T, Result<()>) {
        let saved = match self.save_error {
            Some(err) => Err(err),
            None => Ok(()),
        };
        (self.value, saved)
    }
}

/// The note collection and its lifecycle against a `NoteStorage`.
pub struct NoteStore<S: NoteStorage = FlatFileStorage> {
    storage: S,
    notes: Vec<Note>,
    /// `None` once `u32::MAX` has been handed out or loaded.
    next_id: Option<u32>,
}

impl NoteStore<FlatFileStorage> {
    /// Open the flat file at `path` and load it.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadReport) {
        Self::with_storage(FlatFileStorage::new(path))
    }
}

impl<S: NoteStorage> NoteStore<S> {
    /// Wrap `storage` and load it.
    pub fn with_storage(storage: S) -> (Self, LoadReport) {
        let mut store = Self {
            storage,
            notes: Vec::new(),
            next_id: Some(1),
        };
        let report = store.load();
        (store, report)
    }

    /// Reload the collection from storage.
    ///
    /// The in-memory notes are replaced by what is read. `next_id` only
    /// ever grows, so ids handed out earlier in this session stay retired.
    pub fn load(&mut self) -> LoadReport {
        let location = self.storage.location();
        let batch = match self.storage.read_notes() {
            Ok(Some(batch)) => batch,
            Ok(None) => {
                self.notes.clear();
                info!(path = %location, "no notes file found, starting empty");
                return LoadReport::default();
            }
            Err(err) => {
                self.notes.clear();
                warn!(path = %location, error = %err, "failed to read notes file");
                return LoadReport {
                    found: true,
                    error: Some(err),
                    ..LoadReport::default()
                };
            }
        };

        self.notes = batch.notes;
        for note in &self.notes {
            if let Some(next) = self.next_id {
                if note.id() >= next {
                    self.next_id = note.id().checked_add(1);
                }
            }
        }

        if let Some(err) = &batch.error {
            warn!(path = %location, error = %err, loaded = self.notes.len(), "notes file read interrupted");
        }
        info!(
            path = %location,
            loaded = self.notes.len(),
            skipped = batch.skipped,
            next_id = ?self.next_id,
            "loaded notes"
        );

        LoadReport {
            found: true,
            loaded: self.notes.len(),
            skipped: batch.skipped,
            error: batch.error,
        }
    }

    /// Rewrite the backing store with the current collection.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Storage` if the rewrite fails. The in-memory
    /// collection is left as it is.
    pub fn save(&mut self) -> Result<()> {
        match self.storage.write_notes(&self.notes) {
            Ok(()) => {
                debug!(path = %self.storage.location(), count = self.notes.len(), "saved notes");
                Ok(())
            }
            Err(err) => {
                warn!(path = %self.storage.location(), error = %err, "failed to save notes");
                Err(err)
            }
        }
    }

    /// Create a note stamped with the current local time.
    ///
    /// The caller is responsible for rejecting an empty title. An empty
    /// category becomes `"General"`.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Other` without touching the collection when
    /// every id has been used. A failed save is not an error here; it is
    /// carried in the returned [`Saved`].
    pub fn create(&mut self, title: &str, content: &str, category: &str) -> Result<Saved<Note>> {
        let timestamp = format_timestamp(&Local::now());
        self.create_at(title, content, category, timestamp)
    }

    /// Create a note with an explicit timestamp string.
    pub fn create_at(
        &mut self,
        title: &str,
        content: &str,
        category: &str,
        timestamp: impl Into<String>,
    ) -> Result<Saved<Note>> {
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };

        let Some(id) = self.next_id else {
            warn!("note id space exhausted");
            return Err(NotesError::Other("note id space exhausted".to_string()));
        };
        self.next_id = id.checked_add(1);
        debug!(id, "allocated note id");

        let note = Note::new(id, title, content, timestamp, category);
        self.notes.push(note.clone());
        let saved = self.save();
        Ok(Saved::new(note, saved))
    }

    /// Look up a note by id.
    pub fn find_by_id(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// All notes in stored order.
    pub fn list_all(&self) -> &[Note] {
        &self.notes
    }

    /// Notes whose category equals `category`, ignoring case.
    pub fn search_by_category(&self, category: &str) -> Vec<&Note> {
        let wanted = category.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.category().to_lowercase() == wanted)
            .collect()
    }

    /// Apply `changes` to the note with `id`.
    ///
    /// Returns `false` without saving if no such note exists. Fields that
    /// are absent or empty in `changes` keep their current value.
    pub fn update(&mut self, id: u32, changes: &NoteUpdate) -> Saved<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id() == id) else {
            debug!(id, "update target not found");
            return Saved::unsaved(false);
        };

        changes.apply(note);
        let saved = self.save();
        Saved::new(true, saved)
    }

    /// Remove the note with `id`.
    ///
    /// Returns `false` without saving if no such note exists. The id is
    /// never handed out again.
    pub fn delete(&mut self, id: u32) -> Saved<bool> {
        let Some(position) = self.notes.iter().position(|note| note.id() == id) else {
            debug!(id, "delete target not found");
            return Saved::unsaved(false);
        };

        self.notes.remove(position);
        let saved = self.save();
        Saved::new(true, saved)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Id the next created note will receive, or `None` when the id
    /// space is used up.
    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ReadBatch;
    use std::cell::Cell;

    /// In-memory backend that can be told to fail writes.
    #[derive(Default)]
    struct MemoryStorage {
        persisted: Option<Vec<Note>>,
        fail_writes: bool,
        read_error: bool,
        writes: Cell<usize>,
    }

    impl NoteStorage for MemoryStorage {
        fn read_notes(&self) -> Result<Option<ReadBatch>> {
            Ok(self.persisted.clone().map(|notes| ReadBatch {
                notes,
                skipped: 0,
                error: self
                    .read_error
                    .then(|| NotesError::Storage("disk went away".to_string())),
            }))
        }

        fn write_notes(&mut self, notes: &[Note]) -> Result<()> {
            self.writes.set(self.writes.get() + 1);
            if self.fail_writes {
                return Err(NotesError::Storage("disk full".to_string()));
            }
            self.persisted = Some(notes.to_vec());
            Ok(())
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    fn note(id: u32) -> Note {
        Note::new(id, format!("n{}", id), "body", "05-Jan-2024 14:30", "General")
    }

    fn empty_store() -> NoteStore<MemoryStorage> {
        NoteStore::with_storage(MemoryStorage::default()).0
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let (store, report) = NoteStore::with_storage(MemoryStorage::default());
        assert!(!report.found);
        assert_eq!(report.loaded, 0);
        assert!(store.list_all().is_empty());
        assert_eq!(store.next_id(), Some(1));
    }

    #[test]
    fn test_load_reconstructs_next_id() {
        let storage = MemoryStorage {
            persisted: Some(vec![note(3), note(7), note(2)]),
            ..MemoryStorage::default()
        };
        let (mut store, report) = NoteStore::with_storage(storage);

        assert_eq!(report.loaded, 3);
        let ids: Vec<u32> = store.list_all().iter().map(Note::id).collect();
        assert_eq!(ids, vec![3, 7, 2]);

        let created = store.create("next", "c", "").unwrap().into_value();
        assert_eq!(created.id(), 8);
    }

    #[test]
    fn test_loaded_max_id_exhausts_id_space() {
        let storage = MemoryStorage {
            persisted: Some(vec![note(u32::MAX), note(4)]),
            ..MemoryStorage::default()
        };
        let (mut store, report) = NoteStore::with_storage(storage);
        assert_eq!(report.loaded, 2);
        assert_eq!(store.next_id(), None);

        let err = store.create("x", "y", "").unwrap_err();
        assert!(matches!(err, NotesError::Other(_)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.storage().writes.get(), 0);

        store.load();
        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let storage = MemoryStorage {
            persisted: Some(vec![note(u32::MAX - 1)]),
            ..MemoryStorage::default()
        };
        let (mut store, _) = NoteStore::with_storage(storage);

        let last = store.create("last", "c", "").unwrap().into_value();
        assert_eq!(last.id(), u32::MAX);
        assert!(store.create("again", "c", "").is_err());

        let ids: Vec<u32> = store.list_all().iter().map(Note::id).collect();
        assert_eq!(ids, vec![u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn test_create_defaults_category_and_saves() {
        let mut store = empty_store();
        let saved = store
            .create_at("Buy milk", "2% milk\nand eggs", "", "05-Jan-2024 14:30")
            .unwrap();

        assert!(saved.save_error().is_none());
        let note = saved.into_value();
        assert_eq!(note.id(), 1);
        assert_eq!(note.category(), "General");
        assert_eq!(store.storage().persisted.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_create_keeps_given_category() {
        let mut store = empty_store();
        let note = store.create("t", "c", "Work").unwrap().into_value();
        assert_eq!(note.category(), "Work");
    }

    #[test]
    fn test_ids_increase_across_deletes() {
        let mut store = empty_store();
        let a = store.create("a", "c", "").unwrap().into_value().id();
        let b = store.create("b", "c", "").unwrap().into_value().id();
        assert!(store.delete(b).into_value());
        let c = store.create("c", "c", "").unwrap().into_value().id();
        assert!(store.delete(a).into_value());
        assert!(store.delete(c).into_value());
        let d = store.create("d", "c", "").unwrap().into_value().id();

        assert_eq!(vec![a, b, c, d], vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reload_never_lowers_next_id() {
        let mut store = empty_store();
        store.create("a", "c", "").unwrap().into_value();
        store.create("b", "c", "").unwrap().into_value();
        assert!(store.delete(2).into_value());

        let report = store.load();
        assert_eq!(report.loaded, 1);
        assert_eq!(store.next_id(), Some(3));
    }

    #[test]
    fn test_find_by_id() {
        let mut store = empty_store();
        store.create("first", "c", "").unwrap().into_value();
        store.create("second", "c", "").unwrap().into_value();

        assert_eq!(store.find_by_id(2).map(Note::title), Some("second"));
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn test_search_by_category_ignores_case() {
        let mut store = empty_store();
        store.create("a", "c", "Work").unwrap().into_value();
        store.create("b", "c", "Personal").unwrap().into_value();
        store.create("c", "c", "WORK").unwrap().into_value();

        let titles: Vec<&str> = store
            .search_by_category("work")
            .into_iter()
            .map(Note::title)
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(store.search_by_category("wor").is_empty());
    }

    #[test]
    fn test_update_keeps_unsupplied_fields() {
        let mut store = empty_store();
        let original = store.create("title", "old", "Work").unwrap().into_value();

        let changes = NoteUpdate::new().content("new content").category("");
        assert!(store.update(original.id(), &changes).into_value());

        let updated = store.find_by_id(original.id()).unwrap();
        assert_eq!(updated.title(), "title");
        assert_eq!(updated.content(), "new content");
        assert_eq!(updated.category(), "Work");
        assert_eq!(updated.timestamp(), original.timestamp());
    }

    #[test]
    fn test_update_missing_has_no_side_effects() {
        let mut store = empty_store();
        store.create("a", "c", "").unwrap().into_value();
        let writes_before = store.storage().writes.get();

        let saved = store.update(42, &NoteUpdate::new().title("x"));

        assert!(!saved.value());
        assert!(saved.save_error().is_none());
        assert_eq!(store.storage().writes.get(), writes_before);
    }

    #[test]
    fn test_delete_then_lookup_fails() {
        let mut store = empty_store();
        let id = store.create("a", "c", "").unwrap().into_value().id();

        assert!(store.delete(id).into_value());
        assert!(store.find_by_id(id).is_none());
        assert!(!store.update(id, &NoteUpdate::new().title("x")).into_value());
        assert!(!store.delete(id).into_value());
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let (mut store, _) = NoteStore::with_storage(storage);

        let saved = store.create("a", "c", "").unwrap();
        assert!(matches!(saved.save_error(), Some(NotesError::Storage(_))));
        assert_eq!(store.len(), 1);

        let (deleted, result) = store.delete(1).into_parts();
        assert!(deleted);
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_interrupted_load_keeps_partial_notes() {
        let storage = MemoryStorage {
            persisted: Some(vec![note(5)]),
            read_error: true,
            ..MemoryStorage::default()
        };
        let (store, report) = NoteStore::with_storage(storage);

        assert!(report.error.is_some());
        assert_eq!(report.loaded, 1);
        assert_eq!(store.next_id(), Some(6));
    }
}
