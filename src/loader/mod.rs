//! Line-oriented loader for Chicago crime data.
//!
//! Splits a text blob into non-empty lines, splits each line on the
//! delimiter, checks the field count, and maps fields positionally onto
//! [`CrimeRecord`]. A single bad line aborts the whole load; malformed numbers
//! never do.
//!
//! ```rust
//! use crime_loader::loader::CrimeLoader;
//! use crime_loader::config::{LineEnding, LoaderConfig};
//!
//! let loader = CrimeLoader::new(LoaderConfig::default().with_line_ending(LineEnding::Any));
//! let records = loader
//!     .load(Some("1,2,CASE01,2020-01-01,123 Main St,1811,THEFT,OVER $500,STREET,N,N,12,3,06,1180000,1830000,41.88,-87.63"))
//!     .unwrap();
//! assert_eq!(records[0].case_no, "CASE01");
//! ```

#[cfg(test)]
pub mod tests;

use crate::config::LoaderConfig;
use crate::constants::SCHEMA_WIDTH;
use crate::error::{CrimeDataError, Result};
use crate::field_parsers::CoercionCounter;
use crate::models::{CrimeRecord, LoadStats};
use std::time::Instant;
use tracing::debug;

/// Everything produced by one successful load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutput {
    /// Non-empty input lines, index-aligned with `records`
    pub lines: Vec<String>,
    pub records: Vec<CrimeRecord>,
    pub stats: LoadStats,
}

/// Converts raw text into crime records under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct CrimeLoader {
    config: LoaderConfig,
}

impl CrimeLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parse `text` into records. Absent or empty input yields no records.
    pub fn load(&self, text: Option<&str>) -> Result<Vec<CrimeRecord>> {
        self.load_lines(text).map(|output| output.records)
    }

    /// Parse `text`, keeping the raw lines and load statistics alongside the records
    pub fn load_lines(&self, text: Option<&str>) -> Result<LoadOutput> {
        let start_time = Instant::now();

        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("No dataset text supplied, producing an empty load");
                return Ok(LoadOutput::default());
            }
        };

        let lines = self.config.line_ending.split(text);
        let mut records = Vec::with_capacity(lines.len());
        let mut counter = CoercionCounter::new();

        for (index, line) in lines.iter().enumerate() {
            let fields = split_fields(line, self.config.delimiter);
            let record = self.build_record(index + 1, &fields, &mut counter)?;
            records.push(record);
        }

        let stats = LoadStats {
            lines_read: lines.len(),
            records_loaded: records.len(),
            fields_defaulted: counter.defaulted(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        debug!(
            "Loaded {} records from {} lines ({} numeric fields defaulted to zero)",
            stats.records_loaded, stats.lines_read, stats.fields_defaulted
        );

        Ok(LoadOutput {
            lines: lines.into_iter().map(str::to_string).collect(),
            records,
            stats,
        })
    }

    fn build_record(
        &self,
        line: usize,
        fields: &[&str],
        counter: &mut CoercionCounter,
    ) -> Result<CrimeRecord> {
        let insufficient = || CrimeDataError::InsufficientFields {
            line,
            found: fields.len(),
            expected: SCHEMA_WIDTH,
        };

        if !self.config.field_count_check.accepts(fields.len()) {
            debug!(
                "Line {} has {} fields under {:?} check, aborting load",
                line,
                fields.len(),
                self.config.field_count_check
            );
            return Err(insufficient());
        }

        CrimeRecord::from_fields_counted(fields, counter).ok_or_else(insufficient)
    }
}

/// Split one line into raw fields; no quoting is recognised
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).collect()
}

/// Parse `text` with the default configuration
pub fn load(text: Option<&str>) -> Result<Vec<CrimeRecord>> {
    CrimeLoader::default().load(text)
}
