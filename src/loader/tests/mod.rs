//! Tests for the crime data loader
//!
//! Shared fixtures live here; behaviour is grouped by concern.


use crate::constants::PLATFORM_NEWLINE;

/// The reference line used throughout the loader tests
pub const SAMPLE_LINE: &str = "1,2,CASE01,2020-01-01,123 Main St,1811,THEFT,OVER $500,STREET,N,N,12,3,06,1180000,1830000,41.88,-87.63";

pub const SECOND_LINE: &str = "5,7,HY411648,09/05/2015 01:30:00 PM,043XX S WOOD ST,486,BATTERY,DOMESTIC BATTERY SIMPLE,RESIDENCE,false,true,924,12,08B,1165074,1875917,41.815117282,-87.669999562";

/// Join lines with the platform newline, as the default configuration expects
pub fn join_lines(lines: &[&str]) -> String {
    lines.join(PLATFORM_NEWLINE)
}

/// Replace one comma separated field of `line`
pub fn with_field(line: &str, index: usize, value: &str) -> String {
    let mut fields: Vec<&str> = line.split(',').collect();
    fields[index] = value;
    fields.join(",")
}
