//! JSON output formatting for notes.

use notes_core::Note;

/// Convert a note to JSON for output.
pub fn note_json(note: &Note) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(note)
}

/// Convert multiple notes to a JSON array for output.
pub fn notes_json(notes: &[&Note]) -> serde_json::Result<Vec<serde_json::Value>> {
    notes.iter().map(|note| note_json(note)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_json_fields() {
        let note = Note::new(3, "Standup", "Notes\nfrom standup", "01-Mar-2024 09:15", "Work");
        let value = note_json(&note).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["title"], "Standup");
        assert_eq!(value["content"], "Notes\nfrom standup");
        assert_eq!(value["timestamp"], "01-Mar-2024 09:15");
        assert_eq!(value["category"], "Work");
        assert_eq!(value.as_object().map(|fields| fields.len()), Some(5));
    }

    #[test]
    fn test_notes_json_keeps_order() {
        let a = Note::new(2, "b", "x", "t", "General");
        let b = Note::new(1, "a", "y", "t", "General");
        let values = notes_json(&[&a, &b]).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["id"], 2);
        assert_eq!(values[1]["id"], 1);
    }
}
