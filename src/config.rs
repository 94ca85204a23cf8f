//! Configuration management and validation.
//!
//! Provides the loader configuration: how lines are separated, how fields are
//! delimited, and how strictly the per-line field count is checked.

use crate::constants::{DEFAULT_DELIMITER, PLATFORM_NEWLINE, SCHEMA_WIDTH};
use crate::error::{CrimeDataError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Field-count policy applied to every line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCountCheck {
    /// Every line must have exactly the schema width
    #[default]
    Exact,
    /// Any non-zero multiple of the schema width passes; extra fields are dropped
    MultipleOfSchema,
}

impl FieldCountCheck {
    /// Check a line's field count against the schema width
    pub fn accepts(&self, found: usize) -> bool {
        match self {
            FieldCountCheck::Exact => found == SCHEMA_WIDTH,
            FieldCountCheck::MultipleOfSchema => found != 0 && found % SCHEMA_WIDTH == 0,
        }
    }
}

/// Line separator used when splitting the input text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Platform,
    Lf,
    #[serde(rename = "crlf")]
    #[value(name = "crlf")]
    CrLf,
    /// `\n` with an optional trailing `\r` stripped
    Any,
}

impl LineEnding {
    /// Split text into lines, dropping empty ones
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let lines: Vec<&str> = match self {
            LineEnding::Platform => text.split(PLATFORM_NEWLINE).collect(),
            LineEnding::Lf => text.split('\n').collect(),
            LineEnding::CrLf => text.split("\r\n").collect(),
            LineEnding::Any => text.lines().collect(),
        };

        lines.into_iter().filter(|line| !line.is_empty()).collect()
    }
}

/// Configuration for the crime dataset loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Field-count policy
    pub field_count_check: FieldCountCheck,

    /// Line separator policy
    pub line_ending: LineEnding,

    /// Field delimiter; no quoting or escaping is supported
    pub delimiter: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            field_count_check: FieldCountCheck::Exact,
            line_ending: LineEnding::Platform,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl LoaderConfig {
    /// Accept any multiple of the schema width per line
    pub fn lenient(mut self) -> Self {
        self.field_count_check = FieldCountCheck::MultipleOfSchema;
        self
    }

    /// Set the field-count policy
    pub fn with_field_count_check(mut self, check: FieldCountCheck) -> Self {
        self.field_count_check = check;
        self
    }

    /// Set the line separator policy
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reject settings that cannot split a line into fields
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(CrimeDataError::configuration(format!(
                "delimiter {:?} collides with the line separator",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Load a JSON configuration file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CrimeDataError::io(path, e))?;

        let config: LoaderConfig = serde_json::from_str(&content).map_err(|e| {
            CrimeDataError::configuration(format!(
                "invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded loader config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_field_count_check_exact() {
        let check = FieldCountCheck::Exact;
        assert!(check.accepts(18));
        assert!(!check.accepts(17));
        assert!(!check.accepts(36));
        assert!(!check.accepts(0));
    }

    #[test]
    fn test_field_count_check_multiple() {
        let check = FieldCountCheck::MultipleOfSchema;
        assert!(check.accepts(18));
        assert!(check.accepts(36));
        assert!(check.accepts(54));
        assert!(!check.accepts(19));
        assert!(!check.accepts(0));
    }

    #[test]
    fn test_line_ending_split() {
        let text = "a\r\nb\n\nc\r\n";
        assert_eq!(LineEnding::Any.split(text), vec!["a", "b", "c"]);
        assert_eq!(LineEnding::Lf.split(text), vec!["a\r", "b", "c\r"]);
        assert_eq!(LineEnding::CrLf.split(text), vec!["a", "b\n\nc"]);
        assert!(LineEnding::Any.split("").is_empty());
    }

    #[test]
    fn test_platform_line_ending() {
        let text = format!("one{nl}{nl}two{nl}", nl = PLATFORM_NEWLINE);
        assert_eq!(LineEnding::Platform.split(&text), vec!["one", "two"]);
    }

    #[test]
    fn test_default_config() {
        let config = LoaderConfig::default();
        assert_eq!(config.field_count_check, FieldCountCheck::Exact);
        assert_eq!(config.line_ending, LineEnding::Platform);
        assert_eq!(config.delimiter, ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_newline_delimiter() {
        let config = LoaderConfig::default().with_delimiter('\n');
        assert!(matches!(
            config.validate(),
            Err(CrimeDataError::Configuration { .. })
        ));
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"{{"field_count_check": "multiple_of_schema", "line_ending": "any"}}"#
        )
        .unwrap();

        let config = LoaderConfig::from_json_file(temp_file.path()).unwrap();
        assert_eq!(config.field_count_check, FieldCountCheck::MultipleOfSchema);
        assert_eq!(config.line_ending, LineEnding::Any);
        assert_eq!(config.delimiter, ',');
    }

    #[test]
    fn test_from_json_file_invalid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not json").unwrap();

        let result = LoaderConfig::from_json_file(temp_file.path());
        assert!(matches!(result, Err(CrimeDataError::Configuration { .. })));
    }
}
