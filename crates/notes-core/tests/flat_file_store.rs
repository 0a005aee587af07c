use std::fs;

use notes_core::{NoteStore, NoteUpdate, NotesError};
use tempfile::tempdir;

#[test]
fn test_create_save_reload_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");

    let (mut store, report) = NoteStore::open(&path);
    assert!(!report.found);
    assert!(store.list_all().is_empty());

    let saved = store.create("Buy milk", "2% milk\nand eggs", "").unwrap();
    assert!(saved.save_error().is_none());
    let created = saved.into_value();
    assert_eq!(created.id(), 1);
    assert_eq!(created.category(), "General");
    assert!(created.content().contains('\n'));

    let (reloaded, report) = NoteStore::open(&path);
    assert!(report.found);
    assert_eq!(report.loaded, 1);
    let note = reloaded.find_by_id(1).expect("note should reload");
    assert_eq!(note, &created);
    assert_eq!(note.content(), "2% milk\nand eggs");
}

#[test]
fn test_load_tolerates_malformed_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    fs::write(
        &path,
        "1|||Good|||fine|||05-Jan-2024 14:30|||Work\n2|||Bad|||missing a field|||05-Jan-2024 14:31\n",
    )
    .expect("write fixture");

    let (store, report) = NoteStore::open(&path);

    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped, 1);
    assert!(report.error.is_none());
    assert_eq!(store.list_all().len(), 1);
    assert_eq!(store.list_all()[0].title(), "Good");
}

#[test]
fn test_next_id_from_existing_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    fs::write(
        &path,
        "3|||c|||x|||05-Jan-2024 14:30|||General\n\
         7|||g|||x|||05-Jan-2024 14:30|||General\n\
         2|||b|||x|||05-Jan-2024 14:30|||General\n",
    )
    .expect("write fixture");

    let (mut store, _) = NoteStore::open(&path);
    let created = store.create("next", "body", "Work").unwrap().into_value();

    assert_eq!(created.id(), 8);
    let on_disk = fs::read_to_string(&path).expect("read back");
    let ids: Vec<&str> = on_disk
        .lines()
        .map(|line| line.split("|||").next().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["3", "7", "2", "8"]);
}

#[test]
fn test_update_and_delete_persist() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");

    let (mut store, _) = NoteStore::open(&path);
    store.create("one", "first", "Work").unwrap().into_value();
    store.create("two", "second", "Home").unwrap().into_value();
    assert!(store
        .update(1, &NoteUpdate::new().title("uno"))
        .into_value());
    assert!(store.delete(2).into_value());

    let (reloaded, _) = NoteStore::open(&path);
    assert_eq!(reloaded.len(), 1);
    let note = reloaded.find_by_id(1).expect("note 1");
    assert_eq!(note.title(), "uno");
    assert_eq!(note.content(), "first");
    assert_eq!(note.category(), "Work");
}

#[test]
fn test_save_failure_is_reported_not_rolled_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing-dir").join("notes.txt");

    let (mut store, report) = NoteStore::open(&path);
    assert!(!report.found);

    let saved = store.create("t", "c", "").unwrap();
    assert!(matches!(saved.save_error(), Some(NotesError::Storage(_))));
    assert_eq!(store.len(), 1);
    assert!(!path.exists());
}

#[test]
fn test_directory_path_reports_load_error() {
    let dir = tempdir().expect("tempdir");

    let (store, report) = NoteStore::open(dir.path());

    assert!(report.found);
    assert!(report.error.is_some());
    assert!(store.is_empty());
}

#[test]
fn test_max_id_in_file_blocks_duplicate_ids() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, "4294967295|||a|||b|||05-Jan-2024 14:30|||General\n")
        .expect("write fixture");

    let (mut store, report) = NoteStore::open(&path);
    assert_eq!(report.loaded, 1);
    assert_eq!(store.next_id(), None);

    assert!(store.create("x", "y", "").is_err());
    assert_eq!(store.len(), 1);
    let on_disk = fs::read_to_string(&path).expect("read back");
    assert_eq!(on_disk.lines().count(), 1);
}
