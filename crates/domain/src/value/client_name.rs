//! Client display name, 4 to 100 characters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MIN_LEN: usize = 4;
const MAX_LEN: usize = 100;

/// A validated client name. Stored verbatim — no trimming or casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientName(String);

impl ClientName {
    /// Validate and wrap a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyClientName`] for blank input,
    /// [`ValidationError::ClientNameTooShort`] below 4 characters, and
    /// [`ValidationError::ClientNameTooLong`] above 100 characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyClientName);
        }
        if raw.chars().count() < MIN_LEN {
            return Err(ValidationError::ClientNameTooShort);
        }
        if raw.chars().count() > MAX_LEN {
            return Err(ValidationError::ClientNameTooLong);
        }
        Ok(Self(raw))
    }

    /// Borrow the wrapped value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ClientName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientName> for String {
    fn from(value: ClientName) -> Self {
        value.0
    }
}
