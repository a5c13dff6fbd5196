//! Lenient tag lookups: a missing tag, a blank value and a value that fails
//! to parse all collapse into "absent".

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::str::FromStr;

use crate::dataset::enums::split_and_parse;
use crate::domain::AtonRecord;

/// Read-only view over one record's tags
#[derive(Debug, Clone, Copy)]
pub struct TagLookup<'a> {
    record: &'a AtonRecord,
}

impl<'a> TagLookup<'a> {
    pub fn new(record: &'a AtonRecord) -> Self {
        Self { record }
    }

    /// Trimmed tag value, `None` when missing or blank
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.record
            .tag(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Translate a single value
    pub fn parse_with<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.get(key).and_then(parse)
    }

    /// Translate a `;`-separated value element by element
    pub fn list_with<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
        self.get(key)
            .map(|v| split_and_parse(v, parse))
            .unwrap_or_default()
    }

    /// Numeric value; non-numeric text is treated as absent
    pub fn number<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse::<T>().ok())
    }

    /// ISO-8601 date-time or plain date, truncated to the date
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.get(key).and_then(parse_truncated_date)
    }
}

/// Parse an ISO-8601 date-time (with or without offset) or a plain date
pub fn parse_truncated_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
