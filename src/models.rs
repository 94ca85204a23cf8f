//! Core data structures for crime dataset loading.
//!
//! Defines the fixed 18-column crime record and the per-load statistics
//! reported by the loader.

use crate::constants::{
    FALSE_FLAG_VALUES, OCCURRENCE_DATE_FORMATS, OCCURRENCE_DATETIME_FORMATS, SCHEMA_WIDTH,
    TRUE_FLAG_VALUES,
};
use crate::field_parsers::CoercionCounter;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the Chicago crime dataset.
///
/// Fields are filled positionally from a split line; text columns are kept
/// verbatim and numeric columns are parsed with a zero fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrimeRecord {
    pub grid_x_loc: i32,
    pub grid_y_loc: i32,
    #[serde(rename = "caseNo")]
    pub case_no: String,
    #[serde(rename = "dateOfOccurrence")]
    pub date_of_occurrence: String,
    #[serde(rename = "blockAddress")]
    pub block_address: String,
    #[serde(rename = "IUCR")]
    pub iucr: i32,
    #[serde(rename = "primaryDescription")]
    pub primary_description: String,
    #[serde(rename = "secondaryDescription")]
    pub secondary_description: String,
    #[serde(rename = "locationType")]
    pub location_type: String,
    #[serde(rename = "arrestMade")]
    pub arrest_made: String,
    pub domestic: String,
    pub beat: i32,
    pub ward: i32,
    pub fbi_cd: String,
    pub x_coord: i64,
    pub y_coord: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CrimeRecord {
    /// Build a record from split fields.
    ///
    /// `fields` must hold at least [`SCHEMA_WIDTH`] entries; anything past
    /// that is ignored. Returns `None` when the slice is too short.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        let mut counter = CoercionCounter::new();
        Self::from_fields_counted(fields, &mut counter)
    }

    /// Same as [`CrimeRecord::from_fields`], counting defaulted numeric fields
    pub fn from_fields_counted(fields: &[&str], counter: &mut CoercionCounter) -> Option<Self> {
        let f: &[&str; SCHEMA_WIDTH] = fields.get(..SCHEMA_WIDTH)?.try_into().ok()?;

        Some(Self {
            grid_x_loc: counter.i32(f[0]),
            grid_y_loc: counter.i32(f[1]),
            case_no: f[2].to_string(),
            date_of_occurrence: f[3].to_string(),
            block_address: f[4].to_string(),
            iucr: counter.i32(f[5]),
            primary_description: f[6].to_string(),
            secondary_description: f[7].to_string(),
            location_type: f[8].to_string(),
            arrest_made: f[9].to_string(),
            domestic: f[10].to_string(),
            beat: counter.i32(f[11]),
            ward: counter.i32(f[12]),
            fbi_cd: f[13].to_string(),
            x_coord: counter.i64(f[14]),
            y_coord: counter.i64(f[15]),
            latitude: counter.f64(f[16]),
            longitude: counter.f64(f[17]),
        })
    }

    /// Interpret the raw occurrence date, if it matches a known export format
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        let raw = self.date_of_occurrence.trim();

        OCCURRENCE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                OCCURRENCE_DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    /// Arrest column as a boolean, `None` for unrecognised values
    pub fn arrest_flag(&self) -> Option<bool> {
        parse_flag(&self.arrest_made)
    }

    /// Domestic column as a boolean, `None` for unrecognised values
    pub fn domestic_flag(&self) -> Option<bool> {
        parse_flag(&self.domestic)
    }

    /// Whether the record carries a usable latitude/longitude pair
    pub fn has_location(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if TRUE_FLAG_VALUES.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        Some(true)
    } else if FALSE_FLAG_VALUES.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        Some(false)
    } else {
        None
    }
}

/// Statistics for a single load
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Non-empty lines found in the input
    pub lines_read: usize,
    /// Records built
    pub records_loaded: usize,
    /// Numeric fields that fell back to zero
    pub fields_defaulted: usize,
    pub processing_time_ms: u128,
}
