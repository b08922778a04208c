//! IMEI — International Mobile Equipment Identity, exactly 15 digits.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const IMEI_LEN: usize = 15;

/// A validated IMEI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Imei(String);

impl Imei {
    /// Validate and wrap a raw IMEI.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyImei`] for blank input and
    /// [`ValidationError::InvalidImei`] unless the value is exactly 15
    /// ASCII digits.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyImei);
        }
        if raw.len() != IMEI_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidImei);
        }
        Ok(Self(raw))
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Imei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Imei {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Imei> for String {
    fn from(value: Imei) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_exactly_fifteen_digits() {
        let imei = Imei::new("123456789012345").unwrap();
        assert_eq!(imei.as_str(), "123456789012345");
    }

    #[test]
    fn should_reject_empty_or_whitespace() {
        assert_eq!(Imei::new(""), Err(ValidationError::EmptyImei));
        assert_eq!(Imei::new("   "), Err(ValidationError::EmptyImei));
    }

    #[test]
    fn should_reject_fourteen_digits_with_hint() {
        let err = Imei::new("12345678901234").unwrap_err();
        assert_eq!(err, ValidationError::InvalidImei);
        assert_eq!(err.to_string(), "IMEI format is invalid.");
        assert_eq!(err.hints(), &["It should be a 15-digit number."]);
    }

    #[test]
    fn should_reject_sixteen_digits_or_non_digits() {
        assert_eq!(
            Imei::new("1234567890123456"),
            Err(ValidationError::InvalidImei)
        );
        assert_eq!(
            Imei::new("12345678901234a"),
            Err(ValidationError::InvalidImei)
        );
        assert_eq!(
            Imei::new("1234567890 2345"),
            Err(ValidationError::InvalidImei)
        );
    }
}
