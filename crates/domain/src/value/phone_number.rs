//! Phone number, 10 to 15 digits, no separators.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MIN_LEN: usize = 10;
const MAX_LEN: usize = 15;

/// A validated phone number. Stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and wrap a raw phone number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPhoneNumber`] for blank input,
    /// [`ValidationError::PhoneNumberLength`] outside 10–15 characters, and
    /// [`ValidationError::PhoneNumberNotDigits`] when any character is not
    /// an ASCII digit.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyPhoneNumber);
        }
        if !(MIN_LEN..=MAX_LEN).contains(&raw.len()) {
            return Err(ValidationError::PhoneNumberLength);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::PhoneNumberNotDigits);
        }
        Ok(Self(raw))
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}
