//! Validated value objects.
//!
//! Each type wraps a `String` that is known to satisfy its format rules:
//! the only way to obtain one is through its validating constructor (or
//! serde deserialization, which goes through the same constructor).
//! Validation applies rules in a fixed order and the first failing rule
//! wins, so a caller only ever sees one error per attempt.
//!
//! Value objects compare by wrapped value, convert losslessly to `String`,
//! and render through `Display` for storage and wire formats.

mod client_name;
mod email;
mod imei;
mod phone_number;
mod serial_number;

pub use client_name::ClientName;
pub use email::Email;
pub use imei::Imei;
pub use phone_number::PhoneNumber;
pub use serial_number::SerialNumber;
