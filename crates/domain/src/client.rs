//! Client — an account that owns devices.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::ClientId;
use crate::time::{self, Timestamp};
use crate::value::{ClientName, Email, PhoneNumber};

/// A registered client. Aggregate root for its [`Device`](crate::device::Device)s.
///
/// The email is unique among active clients; that invariant spans the whole
/// client set and is enforced by the application layer plus the storage
/// unique index, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: Email,
    pub phone: Option<PhoneNumber>,
    /// Active flag; deactivated clients are hidden from listings and
    /// excluded from the email-uniqueness check.
    pub status: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    /// Validate all fields and assemble a new client.
    ///
    /// Validation short-circuits: name first, then email, then phone (only
    /// when a non-blank phone is supplied). The caller sees the first
    /// failure only.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that fails.
    pub fn create(
        name: &str,
        email: &str,
        phone: Option<&str>,
        status: bool,
    ) -> Result<Self, ValidationError> {
        let name = ClientName::new(name)?;
        let email = Email::new(email)?;
        let phone = match phone {
            Some(raw) if !raw.trim().is_empty() => Some(PhoneNumber::new(raw)?),
            _ => None,
        };

        let now = time::now();
        Ok(Self {
            id: ClientId::new(),
            name,
            email,
            phone,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the name with an already-validated value.
    pub fn update_name(&mut self, name: ClientName) {
        self.name = name;
        self.touch();
    }

    /// Replace the email with an already-validated value.
    ///
    /// Uniqueness against other clients is the caller's responsibility.
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    /// Replace the phone with an already-validated value.
    pub fn update_phone(&mut self, phone: PhoneNumber) {
        self.phone = Some(phone);
        self.touch();
    }

    /// Flip the active flag.
    pub fn update_status(&mut self, status: bool) {
        self.status = status;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = time::now();
    }
}
