//! Schema constants for the Chicago crime line format.

/// Number of positional fields in one crime record
pub const SCHEMA_WIDTH: usize = 18;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Column names in positional order, as they appear in the source exports
pub const FIELD_NAMES: [&str; SCHEMA_WIDTH] = [
    "grid_x_loc",
    "grid_y_loc",
    "caseNo",
    "dateOfOccurrence",
    "blockAddress",
    "IUCR",
    "primaryDescription",
    "secondaryDescription",
    "locationType",
    "arrestMade",
    "domestic",
    "beat",
    "ward",
    "fbi_cd",
    "x_coord",
    "y_coord",
    "latitude",
    "longitude",
];

/// Newline convention of the platform the loader was built for
#[cfg(windows)]
pub const PLATFORM_NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
pub const PLATFORM_NEWLINE: &str = "\n";

/// Date formats seen in Chicago crime exports, tried in order
pub const OCCURRENCE_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats, interpreted as midnight
pub const OCCURRENCE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Raw values treated as "true" by the flag helpers (compared case-insensitively)
pub const TRUE_FLAG_VALUES: &[&str] = &["y", "yes", "true", "1"];

/// Raw values treated as "false" by the flag helpers (compared case-insensitively)
pub const FALSE_FLAG_VALUES: &[&str] = &["n", "no", "false", "0"];

/// Environment filter target used when RUST_LOG is not set
pub const LOG_TARGET: &str = "crime_loader";
