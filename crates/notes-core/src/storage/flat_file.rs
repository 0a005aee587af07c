//! Flat text file backend.
//!
//! One note per line in the format produced by [`Note::encode`]. Blank
//! lines and lines that do not decode are ignored on read.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NotesError, Result};
use crate::note::Note;
use crate::storage::traits::{NoteStorage, ReadBatch};

/// File name used when no path is configured, relative to the working directory.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// `NoteStorage` over a single `|||`-delimited text file.
#[derive(Debug, Clone)]
pub struct FlatFileStorage {
    path: PathBuf,
}

impl FlatFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_lines(reader: impl BufRead) -> ReadBatch {
        let mut batch = ReadBatch::default();

        for (index, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    batch.error = Some(NotesError::Storage(format!(
                        "Read failed at line {}: {}",
                        index + 1,
                        err
                    )));
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match Note::decode(&line) {
                Some(note) => batch.notes.push(note),
                None => {
                    debug!(line = index + 1, "skipping malformed note line");
                    batch.skipped += 1;
                }
            }
        }

        batch
    }
}

impl Default for FlatFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES_FILE)
    }
}

impl NoteStorage for FlatFileStorage {
    fn read_notes(&self) -> Result<Option<ReadBatch>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(NotesError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        Ok(Some(Self::read_lines(BufReader::new(file))))
    }

    fn write_notes(&mut self, notes: &[Note]) -> Result<()> {
        crate::fs::replace_file(&self.path, |writer: &mut dyn Write| {
            for note in notes {
                writer.write_all(note.encode().as_bytes())?;
                writer.write_all(b"\n")?;
            }
            Ok(())
        })
        .map_err(|e| {
            NotesError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let storage = FlatFileStorage::new(dir.path().join("absent.txt"));
        assert!(storage.read_notes().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let mut storage = FlatFileStorage::new(dir.path().join("notes.txt"));
        let notes = vec![
            Note::new(1, "a", "line one\nline two", "05-Jan-2024 14:30", "Work"),
            Note::new(4, "b", "x", "06-Jan-2024 08:00", "General"),
        ];

        storage.write_notes(&notes).unwrap();
        let batch = storage.read_notes().unwrap().unwrap();

        assert_eq!(batch.notes, notes);
        assert_eq!(batch.skipped, 0);
        assert!(batch.error.is_none());
    }

    #[test]
    fn test_write_is_one_line_per_note() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut storage = FlatFileStorage::new(&path);
        storage
            .write_notes(&[Note::new(2, "t", "c\nd", "05-Jan-2024 14:30", "General")])
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2|||t|||c<br>d|||05-Jan-2024 14:30|||General\n"
        );
    }

    #[test]
    fn test_write_empty_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "1|||a|||b|||c|||d\n").unwrap();

        FlatFileStorage::new(&path).write_notes(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_read_skips_blank_and_malformed_lines() {
        let input = "\n1|||a|||b|||05-Jan-2024 14:30|||General\n   \nbroken line\n2|||c|||d|||e\n";
        let batch = FlatFileStorage::read_lines(Cursor::new(input));

        assert_eq!(batch.notes.len(), 1);
        assert_eq!(batch.notes[0].id(), 1);
        assert_eq!(batch.skipped, 2);
    }

    #[test]
    fn test_read_handles_crlf() {
        let batch = FlatFileStorage::read_lines(Cursor::new(
            "1|||a|||b|||05-Jan-2024 14:30|||Work\r\n",
        ));
        assert_eq!(batch.notes[0].category(), "Work");
    }

    #[test]
    fn test_read_error_keeps_earlier_notes() {
        let mut bytes = b"1|||a|||b|||05-Jan-2024 14:30|||General\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"2|||c|||d|||05-Jan-2024 14:31|||General\n");

        let batch = FlatFileStorage::read_lines(Cursor::new(bytes));

        assert_eq!(batch.notes.len(), 1);
        assert!(matches!(batch.error, Some(NotesError::Storage(_))));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let mut storage = FlatFileStorage::new(dir.path().join("nope").join("notes.txt"));
        let result = storage.write_notes(&[]);
        assert!(matches!(result, Err(NotesError::Storage(_))));
    }
}
