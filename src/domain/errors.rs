//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not a 10-digit string.
    InvalidPhone(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be exactly 10 digits, got: {}", phone)
            }
            Self::InvalidBirthday(raw) => {
                write!(f, "Birthday must be a valid YYYY-MM-DD date, got: {}", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
