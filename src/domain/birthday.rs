//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual form for birthdays.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from the fixed `YYYY-MM-DD` form at construction time; an
/// impossible calendar date (month 13, Feb 30) is rejected there. No
/// time or timezone component exists, and future dates are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from its `YYYY-MM-DD` textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` for wrong separators,
    /// non-numeric fields, or out-of-range month/day values.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday re-anchored to the given year, keeping month and day.
    ///
    /// Returns `None` when no such date exists in that year, which is
    /// chrono's answer for Feb 29 outside leap years; no extra policy is
    /// layered on top.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }
}

// Serde support - serialize as the YYYY-MM-DD string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - same form it was parsed from
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
