//! Date-of-birth type.
//!
//! The admin UI collects dates of birth as `YYYY-MM-DD`, but the remote API
//! expects (and returns) the value as a Unix-epoch-milliseconds *string*.
//! This type owns that conversion so the rest of the code never juggles raw
//! strings.

use core::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`DateOfBirth`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum DateOfBirthError {
    /// The input string is empty.
    #[error("date of birth cannot be empty")]
    Empty,
    /// The input is neither `YYYY-MM-DD` nor an epoch-milliseconds string.
    #[error("invalid date of birth: {0}")]
    Invalid(String),
}

/// A date of birth.
///
/// Serializes to the wire as an epoch-milliseconds string (midnight UTC),
/// which is what the remote API stores. Deserializes from either that
/// format or a plain `YYYY-MM-DD` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Parse from user input (`YYYY-MM-DD`) or an epoch-milliseconds string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or matches neither format.
    pub fn parse(s: &str) -> Result<Self, DateOfBirthError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(DateOfBirthError::Empty);
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        // Epoch milliseconds, as the API stores it
        if let Ok(millis) = trimmed.parse::<i64>()
            && let Some(dt) = DateTime::from_timestamp_millis(millis)
        {
            return Ok(Self(dt.date_naive()));
        }

        Err(DateOfBirthError::Invalid(trimmed.to_owned()))
    }

    /// The wire representation: epoch milliseconds at midnight UTC, as a string.
    #[must_use]
    pub fn to_epoch_millis_string(self) -> String {
        let midnight = self
            .0
            .and_hms_opt(0, 0, 0)
            .unwrap_or_else(|| self.0.and_time(chrono::NaiveTime::MIN));
        midnight.and_utc().timestamp_millis().to_string()
    }

    /// The form representation (`YYYY-MM-DD`).
    #[must_use]
    pub fn to_form_string(self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// The underlying date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for DateOfBirth {
    type Err = DateOfBirthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DateOfBirth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_epoch_millis_string())
    }
}

impl<'de> Deserialize<'de> for DateOfBirth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_date() {
        let dob = DateOfBirth::parse("1990-06-15").unwrap();
        assert_eq!(dob.to_form_string(), "1990-06-15");
    }

    #[test]
    fn test_wire_format_is_epoch_millis_string() {
        let dob = DateOfBirth::parse("1970-01-02").unwrap();
        assert_eq!(dob.to_epoch_millis_string(), "86400000");
    }

    #[test]
    fn test_parse_epoch_millis_roundtrip() {
        let dob = DateOfBirth::parse("1990-06-15").unwrap();
        let wire = dob.to_epoch_millis_string();
        let back = DateOfBirth::parse(&wire).unwrap();
        assert_eq!(dob, back);
    }

    #[test]
    fn test_serialize_as_millis_string() {
        let dob = DateOfBirth::parse("1970-01-02").unwrap();
        assert_eq!(serde_json::to_string(&dob).unwrap(), "\"86400000\"");
    }

    #[test]
    fn test_deserialize_either_format() {
        let from_millis: DateOfBirth = serde_json::from_str("\"86400000\"").unwrap();
        let from_date: DateOfBirth = serde_json::from_str("\"1970-01-02\"").unwrap();
        assert_eq!(from_millis, from_date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(DateOfBirth::parse(""), Err(DateOfBirthError::Empty)));
        assert!(matches!(
            DateOfBirth::parse("15/06/1990"),
            Err(DateOfBirthError::Invalid(_))
        ));
    }
}
