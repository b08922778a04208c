//! Email address, lower-cased on construction.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// Compiled once per process; the pattern is a constant.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern must compile")
});

/// A validated email address. The wrapped value is always lower-case, which
/// makes equality (and the duplicate-email check) case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate, lower-case, and wrap a raw email address.
    ///
    /// Construction is idempotent: feeding the wrapped value back in
    /// yields an equal [`Email`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEmail`] for blank input and
    /// [`ValidationError::InvalidEmail`] when the shape does not match
    /// `local@domain.tld`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !EMAIL_RE.is_match(raw) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(raw.to_lowercase()))
    }

    /// Borrow the wrapped (lower-case) value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
