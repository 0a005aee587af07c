//! The note record and its line format.
//!
//! A note is persisted as one line of five fields separated by `|||`:
//!
//! ```text
//! <id>|||<title>|||<content>|||<timestamp>|||<category>
//! ```
//!
//! Newlines inside the content are written as the literal marker `<br>`.
//! Fields containing `|||` or `<br>` themselves are not escaped and will not
//! survive a round trip.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Field separator in the notes file.
pub const FIELD_DELIMITER: &str = "|||";

/// Stand-in for `\n` inside the content field.
pub const NEWLINE_MARKER: &str = "<br>";

/// chrono pattern for `dd-MMM-yyyy HH:mm`, e.g. `05-Jan-2024 14:30`.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%Y %H:%M";

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

const FIELD_COUNT: usize = 5;
const SEPARATOR_WIDTH: usize = 60;

/// A single note.
///
/// `id` and `timestamp` are fixed at construction. Title, content and
/// category only change through [`crate::NoteStore::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: u32,
    title: String,
    content: String,
    timestamp: String,
    category: String,
}

impl Note {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            timestamp: timestamp.into(),
            category: category.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Encode as a single line (no trailing newline).
    pub fn encode(&self) -> String {
        format!(
            "{id}{d}{title}{d}{content}{d}{timestamp}{d}{category}",
            id = self.id,
            title = self.title,
            content = self.content.replace('\n', NEWLINE_MARKER),
            timestamp = self.timestamp,
            category = self.category,
            d = FIELD_DELIMITER,
        )
    }

    /// Decode a line produced by [`Note::encode`].
    ///
    /// Returns `None` unless the line splits into exactly five fields and the
    /// first one is a positive integer.
    pub fn decode(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return None;
        }

        let id = parts[0].parse::<u32>().ok().filter(|id| *id > 0)?;
        Some(Self {
            id,
            title: parts[1].to_string(),
            content: parts[2].replace(NEWLINE_MARKER, "\n"),
            timestamp: parts[3].to_string(),
            category: parts[4].to_string(),
        })
    }

    /// Fixed-width one-line summary used in listings.
    pub fn format_brief(&self) -> String {
        format!(
            "ID: {:<3} | {:<30} | Category: {:<15} | {}",
            self.id, self.title, self.category, self.timestamp
        )
    }

    /// Multi-line rendering used when showing a single note.
    pub fn format_full(&self) -> String {
        format!(
            "[ID: {}] {}\nCategory: {}\nCreated: {}\n{}\n{}",
            self.id,
            self.title,
            self.category,
            self.timestamp,
            "-".repeat(SEPARATOR_WIDTH),
            self.content
        )
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub(crate) fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub(crate) fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }
}

/// Render a point in time in the note timestamp format.
///
/// `%b` always yields English month abbreviations, independent of locale.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Replacement values for [`crate::NoteStore::update`].
///
/// A field that is `None` or an empty string leaves the stored value as is;
/// there is no way to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl NoteUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when applying this update would change nothing.
    pub fn is_noop(&self) -> bool {
        [&self.title, &self.content, &self.category]
            .iter()
            .all(|field| field.as_deref().map_or(true, str::is_empty))
    }

    pub(crate) fn apply(&self, note: &mut Note) {
        if let Some(title) = supplied(&self.title) {
            note.set_title(title);
        }
        if let Some(content) = supplied(&self.content) {
            note.set_content(content);
        }
        if let Some(category) = supplied(&self.category) {
            note.set_category(category);
        }
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
