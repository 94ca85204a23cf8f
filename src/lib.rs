//! Crime Loader Library
//!
//! Loads comma separated Chicago crime data into an ordered, in-memory array of
//! typed records.
//!
//! This library provides tools for:
//! - Splitting a text blob into lines and fields with no quoting
//! - Checking each line's field count against the 18-column schema
//! - Best-effort numeric coercion (malformed numbers become zero)
//! - An owned [`Dataset`] that is reloaded explicitly and read through slices
//!
//! ```rust
//! use crime_loader::{Dataset, LoaderConfig};
//! use crime_loader::config::LineEnding;
//!
//! let mut dataset = Dataset::new(LoaderConfig::default().with_line_ending(LineEnding::Any));
//! dataset
//!     .reload(Some("1,2,CASE01,2020-01-01,123 Main St,1811,THEFT,OVER $500,STREET,N,N,12,3,06,1180000,1830000,41.88,-87.63\n"))
//!     .unwrap();
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.records()[0].iucr, 1811);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod field_parsers;
pub mod loader;
pub mod models;

// Re-export commonly used types
pub use config::{FieldCountCheck, LoaderConfig};
pub use dataset::Dataset;
pub use error::{CrimeDataError, Result};
pub use loader::{CrimeLoader, LoadOutput};
pub use models::{CrimeRecord, LoadStats};
