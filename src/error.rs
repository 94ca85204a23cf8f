//! Error handling for crime dataset loading.
//!
//! Numeric coercion never produces an error; the only load-time failure is a
//! line whose field count does not fit the record schema.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrimeDataError {
    #[error(
        "Insufficient fields on line {line}: expected {expected} comma separated values, found {found}"
    )]
    InsufficientFields {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl CrimeDataError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the error came from the field-count check
    pub fn is_insufficient_fields(&self) -> bool {
        matches!(self, Self::InsufficientFields { .. })
    }
}

pub type Result<T> = std::result::Result<T, CrimeDataError>;
