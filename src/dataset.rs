//! Owned, reloadable crime dataset.
//!
//! The host constructs one [`Dataset`], calls [`Dataset::reload`] whenever the
//! underlying text changes, and hands `&Dataset` to whatever needs to read the
//! records. A failed reload leaves the previous contents in place.

use crate::config::LoaderConfig;
use crate::error::{CrimeDataError, Result};
use crate::loader::{CrimeLoader, LoadOutput};
use crate::models::{CrimeRecord, LoadStats};
use std::path::Path;
use tracing::{error, info};

/// Raw lines and parsed records from the last successful load
#[derive(Debug, Default)]
pub struct Dataset {
    loader: CrimeLoader,
    lines: Vec<String>,
    records: Vec<CrimeRecord>,
    last_stats: LoadStats,
}

impl Dataset {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            loader: CrimeLoader::new(config),
            ..Default::default()
        }
    }

    /// Re-parse the dataset text, replacing lines and records on success
    pub fn reload(&mut self, text: Option<&str>) -> Result<&LoadStats> {
        match self.loader.load_lines(text) {
            Ok(LoadOutput {
                lines,
                records,
                stats,
            }) => {
                self.lines = lines;
                self.records = records;
                self.last_stats = stats;
                info!(
                    "Dataset reloaded: {} records ({} numeric fields defaulted)",
                    self.last_stats.records_loaded, self.last_stats.fields_defaulted
                );
                Ok(&self.last_stats)
            }
            Err(e) => {
                error!(
                    "Dataset reload aborted, keeping {} previous records: {}",
                    self.records.len(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Read a dataset file and reload from its contents
    pub fn reload_from_path(&mut self, path: &Path) -> Result<&LoadStats> {
        let text = std::fs::read_to_string(path).map_err(|e| CrimeDataError::io(path, e))?;
        info!("Reloading dataset from {}", path.display());
        self.reload(Some(&text))
    }

    /// Drop all lines and records
    pub fn clear(&mut self) {
        self.lines.clear();
        self.records.clear();
        self.last_stats = LoadStats::default();
    }

    pub fn records(&self) -> &[CrimeRecord] {
        &self.records
    }

    /// Raw lines, index-aligned with [`Dataset::records`]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&CrimeRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CrimeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last_stats(&self) -> &LoadStats {
        &self.last_stats
    }

    pub fn config(&self) -> &LoaderConfig {
        self.loader.config()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CrimeRecord;
    type IntoIter = std::slice::Iter<'a, CrimeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineEnding;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LINE_A: &str = "1,2,CASE01,2020-01-01,123 Main St,1811,THEFT,OVER $500,STREET,N,N,12,3,06,1180000,1830000,41.88,-87.63";
    const LINE_B: &str = "3,4,CASE02,2020-01-02,456 Oak Ave,0486,BATTERY,SIMPLE,APARTMENT,Y,Y,1011,24,08B,1150000,1890000,41.86,-87.70";
    const SHORT: &str = "3,4,CASE02,2020-01-02";

    fn any_line_dataset() -> Dataset {
        Dataset::new(LoaderConfig::default().with_line_ending(LineEnding::Any))
    }

    #[test]
    fn test_reload_populates_aligned_lines_and_records() {
        let mut dataset = any_line_dataset();
        let stats = dataset.reload(Some(&format!("{}\n{}\n", LINE_A, LINE_B))).unwrap();
        assert_eq!(stats.records_loaded, 2);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.lines().len(), dataset.records().len());
        assert_eq!(dataset.lines()[1], LINE_B);
        assert_eq!(dataset.get(1).unwrap().case_no, "CASE02");
        assert_eq!(dataset.get(1).unwrap().iucr, 486);
        assert!(dataset.get(2).is_none());
    }

    #[test]
    fn test_reload_replaces_previous_contents() {
        let mut dataset = any_line_dataset();
        dataset.reload(Some(&format!("{}\n{}", LINE_A, LINE_B))).unwrap();
        dataset.reload(Some(LINE_B)).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].case_no, "CASE02");
        assert_eq!(dataset.lines(), &[LINE_B.to_string()]);
    }

    #[test]
    fn test_failed_reload_keeps_previous_contents() {
        let mut dataset = any_line_dataset();
        dataset.reload(Some(LINE_A)).unwrap();

        let result = dataset.reload(Some(&format!("{}\n{}", LINE_B, SHORT)));
        assert!(matches!(
            result,
            Err(CrimeDataError::InsufficientFields { line: 2, found: 4, .. })
        ));

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].case_no, "CASE01");
        assert_eq!(dataset.last_stats().records_loaded, 1);
    }

    #[test]
    fn test_reload_with_absent_text_empties_dataset() {
        let mut dataset = any_line_dataset();
        dataset.reload(Some(LINE_A)).unwrap();
        dataset.reload(None).unwrap();

        assert!(dataset.is_empty());
        assert!(dataset.lines().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut dataset = any_line_dataset();
        dataset.reload(Some(LINE_A)).unwrap();
        dataset.clear();

        assert!(dataset.is_empty());
        assert_eq!(dataset.last_stats(), &LoadStats::default());
    }

    #[test]
    fn test_iteration() {
        let mut dataset = any_line_dataset();
        dataset.reload(Some(&format!("{}\n{}", LINE_A, LINE_B))).unwrap();

        let cases: Vec<&str> = dataset.iter().map(|r| r.case_no.as_str()).collect();
        assert_eq!(cases, vec!["CASE01", "CASE02"]);

        let wards: Vec<i32> = (&dataset).into_iter().map(|r| r.ward).collect();
        assert_eq!(wards, vec![3, 24]);
    }

    #[test]
    fn test_reload_from_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{}", LINE_A).unwrap();
        writeln!(temp_file, "{}", LINE_B).unwrap();

        let mut dataset = any_line_dataset();
        dataset.reload_from_path(temp_file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].longitude, -87.70);
    }

    #[test]
    fn test_reload_from_missing_path() {
        let mut dataset = any_line_dataset();
        let result = dataset.reload_from_path(Path::new("/nonexistent/crimes.csv"));

        match result {
            Err(CrimeDataError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/crimes.csv"));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
