//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Collapse a multi-line value onto one line for table cells.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First line of note content, shortened for previews.
pub fn preview(content: &str, max_len: usize) -> String {
    let first = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    truncate(first.trim(), max_len)
}
