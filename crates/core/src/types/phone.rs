//! Phone number type.
//!
//! The remote API returns phone numbers as an object whose `original` field
//! holds the number exactly as the user entered it; a normalized variant may
//! accompany it. Form pages unwrap `original` when pre-filling defaults.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains characters that never appear in a phone number.
    #[error("phone number contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// A phone number as stored by the remote API.
///
/// Keeps both the user's `original` input and an optional normalized
/// (E.164-ish) form produced by the API. Only `original` is guaranteed
/// to be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneNumber {
    /// The number exactly as entered by the user.
    pub original: String,
    /// Normalized representation, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

impl PhoneNumber {
    /// Maximum accepted input length.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `PhoneNumber` from user input.
    ///
    /// Accepts digits, spaces, and the separators `+ - ( ) . /`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, too long, or contains a
    /// character outside the accepted set.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| !c.is_ascii_digit() && !matches!(c, ' ' | '+' | '-' | '(' | ')' | '.' | '/'))
        {
            return Err(PhoneNumberError::InvalidCharacter(bad));
        }

        Ok(Self {
            original: trimmed.to_owned(),
            normalized: None,
        })
    }

    /// Returns the user-entered form of the number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.original
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("+49 30 901820").is_ok());
        assert!(PhoneNumber::parse("(030) 901-820").is_ok());
        assert!(PhoneNumber::parse("0309018200").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let phone = PhoneNumber::parse("  +49 30 901820  ").unwrap();
        assert_eq!(phone.as_str(), "+49 30 901820");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse("   "), Err(PhoneNumberError::Empty)));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert!(matches!(
            PhoneNumber::parse("+49 30 call-me"),
            Err(PhoneNumberError::InvalidCharacter(_))
        ));
    }

    #[test]
    fn test_deserialize_api_shape() {
        // The API wraps numbers in an object; `original` is what forms unwrap.
        let phone: PhoneNumber =
            serde_json::from_str(r#"{"original":"030 901820","normalized":"+4930901820"}"#)
                .unwrap();
        assert_eq!(phone.original, "030 901820");
        assert_eq!(phone.normalized.as_deref(), Some("+4930901820"));
    }
}
