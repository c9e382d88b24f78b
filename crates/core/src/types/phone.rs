//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input has the wrong number of characters.
    #[error("phone number must be exactly {expected} digits (got {actual})")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the input.
        actual: usize,
    },
    /// The input contains something other than ASCII digits.
    #[error("phone number must contain only digits")]
    NonDigit,
}

/// A ten-digit mobile number.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed before checking
/// - Exactly 10 characters, all ASCII digits
/// - No country code, spaces, or separators
///
/// ## Examples
///
/// ```
/// use foodhub_core::Phone;
///
/// assert!(Phone::parse("9876543210").is_ok());
/// assert!(Phone::parse(" 9876543210 ").is_ok());
///
/// assert!(Phone::parse("12345").is_err());         // too short
/// assert!(Phone::parse("+919876543210").is_err()); // country code
/// assert!(Phone::parse("98765 43210").is_err());   // separator
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Required number of digits.
    pub const LENGTH: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input:
    /// - Is empty
    /// - Is not exactly 10 characters long
    /// - Contains anything other than ASCII digits
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let actual = s.chars().count();
        if actual != Self::LENGTH {
            return Err(PhoneError::WrongLength {
                expected: Self::LENGTH,
                actual,
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Phone::parse("1234567890").is_ok());
        assert_eq!(Phone::parse("  0000000000\n").unwrap().as_str(), "0000000000");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Phone::parse("   "), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(
            Phone::parse("12345"),
            Err(PhoneError::WrongLength {
                expected: 10,
                actual: 5
            })
        );
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Phone::parse("12345678901"),
            Err(PhoneError::WrongLength { actual: 11, .. })
        ));
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(Phone::parse("12345-7890"), Err(PhoneError::NonDigit));
        // Non-ASCII digits do not count.
        assert!(Phone::parse("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = Phone::parse("9876543210").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"9876543210\"");
    }
}
