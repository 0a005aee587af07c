//! Parsing of command-line values.

use crate::errors::CliError;

/// Output format for the list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse a note ID typed by the user.
pub fn parse_note_id(value: &str) -> anyhow::Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CliError::invalid_input(format!("Invalid note ID: {}", value)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::exit_code_for;
    use crate::constants::exit_codes;

    #[test]
    fn test_parse_note_id() {
        assert_eq!(parse_note_id("7").unwrap(), 7);
        assert_eq!(parse_note_id(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_parse_note_id_rejects_garbage() {
        for bad in ["abc", "0", "-3", ""] {
            let err = parse_note_id(bad).unwrap_err();
            assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT, "{bad}");
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
