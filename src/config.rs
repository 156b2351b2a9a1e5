use csv::Terminator;
use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// Suggested filename of an exported table.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "edited_data.csv";

/// Declared media type of an exported table.
pub const EXPORT_MEDIA_TYPE: &str = "text/csv;charset=utf-8";

/// What to do with a decoded row whose width differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaggedRowPolicy {
    /// Pad short rows with empty fields and truncate long ones.
    #[default]
    Normalize,
    /// Fail the whole ingest.
    Reject,
}

/// Record terminator written on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl From<LineEnding> for Terminator {
    fn from(ending: LineEnding) -> Self {
        match ending {
            LineEnding::Crlf => Terminator::CRLF,
            LineEnding::Lf => Terminator::Any(b'\n'),
        }
    }
}

/// Options of an editor, usually built in code or loaded from JSON.
///
/// ```
/// use csv_edit_session::config::{EditorOptions, LineEnding, RaggedRowPolicy};
///
/// let options = EditorOptions::from_json_str(r#"{ "delimiter": ";", "line_ending": "lf" }"#).unwrap();
///
/// assert_eq!(options.delimiter, ';');
/// assert_eq!(options.line_ending, LineEnding::Lf);
/// assert_eq!(options.ragged_rows, RaggedRowPolicy::Normalize);
/// assert_eq!(options.file_name, "edited_data.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub delimiter: char,
    pub line_ending: LineEnding,
    pub ragged_rows: RaggedRowPolicy,
    pub file_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            line_ending: LineEnding::default(),
            ragged_rows: RaggedRowPolicy::default(),
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EditorOptions {
    pub fn from_json_str(json: &str) -> Result<Self, EditError> {
        let options: EditorOptions =
            serde_json::from_str(json).map_err(|error| EditError::Config(error.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks the options can drive the CSV codec.
    pub fn validate(&self) -> Result<(), EditError> {
        self.delimiter_byte()?;

        if self.file_name.trim().is_empty() {
            return Err(EditError::Config("export file name is empty".to_string()));
        }

        Ok(())
    }

    pub(crate) fn delimiter_byte(&self) -> Result<u8, EditError> {
        if !self.delimiter.is_ascii() {
            return Err(EditError::Config(format!(
                "delimiter {:?} is not a single-byte character",
                self.delimiter
            )));
        }

        match self.delimiter as u8 {
            b'"' => Err(EditError::Config(
                "delimiter cannot be the quote character".to_string(),
            )),
            b'\r' | b'\n' => Err(EditError::Config(
                "delimiter cannot be a line break".to_string(),
            )),
            byte => Ok(byte),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_export_contract() {
        let options = EditorOptions::default();

        assert_eq!(options.delimiter, ',');
        assert_eq!(options.line_ending, LineEnding::Crlf);
        assert_eq!(options.file_name, DEFAULT_EXPORT_FILE_NAME);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn reject_policy_from_json() {
        let options = EditorOptions::from_json_str(r#"{ "ragged_rows": "reject" }"#).unwrap();

        assert_eq!(options.ragged_rows, RaggedRowPolicy::Reject);
    }

    #[test]
    fn invalid_delimiters_are_refused() {
        for delimiter in ['"', '\n', 'é'] {
            let options = EditorOptions {
                delimiter,
                ..EditorOptions::default()
            };
            assert!(matches!(options.validate(), Err(EditError::Config(_))));
        }
    }

    #[test]
    fn empty_file_name_is_refused() {
        let result = EditorOptions::from_json_str(r#"{ "file_name": "  " }"#);

        assert!(matches!(result, Err(EditError::Config(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let result = EditorOptions::from_json_str("{ delimiter: ");

        assert!(matches!(result, Err(EditError::Config(_))));
    }
}
