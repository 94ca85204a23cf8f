//! Best-effort field coercion for crime records
//!
//! Numeric columns are parsed in their target type and silently fall back to
//! zero when the text is not a valid number. Callers that want to know how
//! many values were defaulted pass a counter along.

use std::str::FromStr;

/// Parse a numeric field in its target type, ignoring surrounding whitespace
pub fn try_parse<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse::<T>().ok()
}

/// Parse a floating point field; `NaN` and infinities count as failures
pub fn try_parse_f64(value: &str) -> Option<f64> {
    try_parse::<f64>(value).filter(|v| v.is_finite())
}

/// Tracks how many numeric fields fell back to zero while building records
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoercionCounter {
    defaulted: usize,
}

impl CoercionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an i32 and count the fallback
    pub fn i32(&mut self, value: &str) -> i32 {
        self.track(try_parse(value))
    }

    /// Parse an i64 and count the fallback
    pub fn i64(&mut self, value: &str) -> i64 {
        self.track(try_parse(value))
    }

    /// Parse an f64 and count the fallback, non-finite values included
    pub fn f64(&mut self, value: &str) -> f64 {
        self.track(try_parse_f64(value))
    }

    fn track<T: Default>(&mut self, parsed: Option<T>) -> T {
        match parsed {
            Some(value) => value,
            None => {
                self.defaulted += 1;
                T::default()
            }
        }
    }

    /// Number of fields defaulted so far
    pub fn defaulted(&self) -> usize {
        self.defaulted
    }
}
