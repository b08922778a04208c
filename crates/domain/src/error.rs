//! Error taxonomy shared across the workspace.
//!
//! Expected failures flow through `Result<_, DevManError>`; nothing in this
//! workspace throws for a malformed email or a missing row. Each layer
//! defines its own typed errors and converts via `#[from]`.

use std::fmt;

/// Top-level error type returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum DevManError {
    /// A value object rejected its raw input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced entity id has no matching record.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A uniqueness invariant would be violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// A list query matched zero records.
    #[error(transparent)]
    Empty(#[from] EmptyResultError),

    /// The storage layer failed in a way the domain cannot interpret.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DevManError {
    /// Supplementary hints carried alongside the message (format examples
    /// and the like). Empty for errors without hints.
    #[must_use]
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::Validation(err) => err.hints(),
            Self::NotFound(_) | Self::Conflict(_) | Self::Storage(_) => &[],
            Self::Empty(err) => err.hints(),
        }
    }
}

/// Rejection of raw input by a value-object constructor.
///
/// The first failing rule wins; a caller only ever sees one of these per
/// attempt. `Display` messages are part of the public API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Client name cannot be empty or whitespace.")]
    EmptyClientName,
    #[error("Client name must be at least 4 characters long.")]
    ClientNameTooShort,
    #[error("Client name must not exceed 100 characters.")]
    ClientNameTooLong,

    #[error("Email cannot be empty or whitespace.")]
    EmptyEmail,
    #[error("Email format is invalid.")]
    InvalidEmail,

    #[error("Phone number cannot be empty or whitespace.")]
    EmptyPhoneNumber,
    #[error("Phone number must be between 10 and 15 characters long.")]
    PhoneNumberLength,
    #[error("Phone number must contain only digits.")]
    PhoneNumberNotDigits,

    #[error("Serial number cannot be empty or whitespace.")]
    EmptySerialNumber,
    #[error("Serial number format is invalid.")]
    InvalidSerialNumber,
    #[error("Manufacturer code cannot be empty or whitespace.")]
    EmptyManufacturerCode,
    #[error("Manufacturer code must be exactly 3 uppercase letters.")]
    InvalidManufacturerCode,

    #[error("IMEI cannot be empty or whitespace.")]
    EmptyImei,
    #[error("IMEI format is invalid.")]
    InvalidImei,

    #[error("The provided identifier is not a valid UUID.")]
    InvalidId,

    #[error("The provided event type is unknown.")]
    InvalidEventType,
}

impl ValidationError {
    /// Supplementary format hints surfaced to the caller.
    #[must_use]
    pub fn hints(self) -> &'static [&'static str] {
        match self {
            Self::InvalidEmail => &["It should be in the format 'example@domain.com'."],
            Self::PhoneNumberNotDigits => &["No spaces, dashes, or other characters are allowed."],
            Self::InvalidSerialNumber => &[
                "It should be in the format 'SN-YYYY-MMM-XXXXXXXX'.",
                "Where YYYY is a 4-digit year, MMM is a 3-letter manufacturer code, and XXXXXXXX is an 8-character alphanumeric code.",
            ],
            Self::InvalidImei => &["It should be a 15-digit number."],
            _ => &[],
        }
    }
}

/// A referenced entity does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with ID {id} does not exist.")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Client"`.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

/// A uniqueness invariant would be violated by the requested write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Client with this email already exists.")]
    DuplicateEmail,
    #[error("A device with the same serial number already exists.")]
    DuplicateSerialNumber,
    #[error("A device with the same IMEI already exists.")]
    DuplicateImei,
}

/// A list query matched zero records.
///
/// Modelling the empty collection as a failure mirrors the exposed API
/// contract; whether it should become an empty success is tracked as an
/// open product question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmptyResultError {
    #[error("No clients found.")]
    NoClients,
    #[error("There are no devices for this client.")]
    NoDevicesForClient,
}

impl EmptyResultError {
    #[must_use]
    pub fn hints(self) -> &'static [&'static str] {
        match self {
            Self::NoClients => &["There are no clients in the system."],
            Self::NoDevicesForClient => &[],
        }
    }
}

/// Coarse classification of a [`DevManError`], useful for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevManErrorKind {
    Validation,
    NotFound,
    Conflict,
    Empty,
    Storage,
}

impl fmt::Display for DevManErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Empty => "empty_result",
            Self::Storage => "storage",
        };
        f.write_str(name)
    }
}

impl DevManError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> DevManErrorKind {
        match self {
            Self::Validation(_) => DevManErrorKind::Validation,
            Self::NotFound(_) => DevManErrorKind::NotFound,
            Self::Conflict(_) => DevManErrorKind::Conflict,
            Self::Empty(_) => DevManErrorKind::Empty,
            Self::Storage(_) => DevManErrorKind::Storage,
        }
    }
}
