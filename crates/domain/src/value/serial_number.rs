//! Device serial number in the `SN-YYYY-MMM-XXXXXXXX` format.

use std::fmt;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// SN-<4-digit year>-<3-letter manufacturer code>-<8 alphanumeric chars>.
static SERIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^SN-\d{4}-[A-Z]{3}-[A-Z0-9]{8}$").expect("serial pattern must compile")
});

/// A validated device serial number. Stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Validate and wrap a raw serial number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySerialNumber`] for blank input and
    /// [`ValidationError::InvalidSerialNumber`] when the value does not
    /// match `SN-YYYY-MMM-XXXXXXXX`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptySerialNumber);
        }
        if !SERIAL_RE.is_match(&raw) {
            return Err(ValidationError::InvalidSerialNumber);
        }
        Ok(Self(raw))
    }

    /// Generate a fresh serial for the given manufacturer code.
    ///
    /// The code must be exactly 3 uppercase ASCII letters. The result uses
    /// the current UTC year and an 8-character uppercase suffix taken from
    /// a fresh UUID, and always passes [`SerialNumber::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyManufacturerCode`] for blank input
    /// and [`ValidationError::InvalidManufacturerCode`] otherwise.
    pub fn for_manufacturer(code: &str) -> Result<Self, ValidationError> {
        if code.trim().is_empty() {
            return Err(ValidationError::EmptyManufacturerCode);
        }
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidManufacturerCode);
        }

        let year = crate::time::now().year();
        let suffix: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        Ok(Self(format!("SN-{year}-{code}-{suffix}")))
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SerialNumber> for String {
    fn from(value: SerialNumber) -> Self {
        value.0
    }
}
