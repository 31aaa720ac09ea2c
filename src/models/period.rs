//! Reporting date ranges

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive date range used by the report endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Create a range, checking that `from` does not exceed `to`
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        if from > to {
            return Err(DateRangeError::Inverted { from, to });
        }
        Ok(Self { from, to })
    }

    /// Parse a range from two date strings, trying the configured format
    /// first and falling back to ISO (%Y-%m-%d).
    pub fn parse(from: &str, to: &str, format: &str) -> Result<Self, DateRangeError> {
        let from = parse_date(from, format)?;
        let to = parse_date(to, format)?;
        Self::new(from, to)
    }

    /// Query parameters in the backend's expected form
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("from", self.from.format("%Y-%m-%d").to_string()),
            ("to", self.to.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// Parse a single date, trying the configured format then ISO
pub fn parse_date(s: &str, format: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| DateRangeError::Unparseable(s.to_string()))
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// Errors constructing a date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    Inverted { from: NaiveDate, to: NaiveDate },
    Unparseable(String),
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { from, to } => {
                write!(f, "Start date {} is after end date {}", from, to)
            }
            Self::Unparseable(s) => write!(f, "Could not parse date: '{}'", s),
        }
    }
}

impl std::error::Error for DateRangeError {}
