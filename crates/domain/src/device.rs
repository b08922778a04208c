//! Device — a physical unit (phone, sensor) owned by a client.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{ClientId, DeviceId};
use crate::time::{self, Timestamp};
use crate::value::{Imei, SerialNumber};

/// A registered device. Aggregate root for its [`Event`](crate::event::Event)s.
///
/// Serial number and IMEI are unique across all devices; those invariants
/// span the whole device set and are enforced by the application layer plus
/// the storage unique indexes, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub serial: SerialNumber,
    pub imei: Imei,
    /// Set exactly once by [`Device::activate`]; `None` until then.
    pub activated_at: Option<Timestamp>,
    pub client_id: ClientId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Device {
    /// Validate serial and IMEI and assemble a new, not-yet-activated device.
    ///
    /// Validation short-circuits: serial first, then IMEI.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that fails.
    pub fn create(serial: &str, imei: &str, client_id: ClientId) -> Result<Self, ValidationError> {
        let serial = SerialNumber::new(serial)?;
        let imei = Imei::new(imei)?;

        let now = time::now();
        Ok(Self {
            id: DeviceId::new(),
            serial,
            imei,
            activated_at: None,
            client_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Activate the device, recording the activation time.
    ///
    /// Idempotent: the first call sets `activated_at` and returns `true`;
    /// any later call leaves the device untouched and returns `false`.
    pub fn activate(&mut self) -> bool {
        if self.activated_at.is_some() {
            return false;
        }
        let now = time::now();
        self.activated_at = Some(now);
        self.updated_at = now;
        true
    }

    /// Replace the serial with an already-validated value.
    ///
    /// Uniqueness against other devices is the caller's responsibility.
    pub fn update_serial(&mut self, serial: SerialNumber) {
        self.serial = serial;
        self.touch();
    }

    /// Replace the IMEI with an already-validated value.
    ///
    /// Uniqueness against other devices is the caller's responsibility.
    pub fn update_imei(&mut self, imei: Imei) {
        self.imei = imei;
        self.touch();
    }

    /// Move the device to another client.
    pub fn update_client(&mut self, client_id: ClientId) {
        self.client_id = client_id;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = time::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn valid_device() -> Device {
        Device::create("SN-2024-ABC-1A2B3C4D", "123456789012345", ClientId::new()).unwrap()
    }

    #[test]
    fn should_create_device_with_no_activation() {
        let device = valid_device();
        assert!(device.activated_at.is_none());
        assert_eq!(device.serial.as_str(), "SN-2024-ABC-1A2B3C4D");
        assert_eq!(device.imei.as_str(), "123456789012345");
    }

    #[test]
    fn should_fail_on_first_invalid_field() {
        let client_id = ClientId::new();
        let err = Device::create("bogus", "also-bogus", client_id).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSerialNumber);

        let err = Device::create("SN-2024-ABC-1A2B3C4D", "bogus", client_id).unwrap_err();
        assert_eq!(err, ValidationError::InvalidImei);
    }

    #[test]
    fn should_activate_once_and_refuse_again() {
        let mut device = valid_device();

        assert!(device.activate());
        let activated_at = device.activated_at.expect("must be set");

        assert!(!device.activate());
        assert_eq!(device.activated_at, Some(activated_at));
    }

    #[test]
    fn should_bump_updated_at_on_mutation() {
        let mut device = valid_device();
        let before = device.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(2));

        device.update_imei(Imei::new("543210987654321").unwrap());
        assert!(device.updated_at > before);
        assert_eq!(device.imei.as_str(), "543210987654321");
    }

    #[test]
    fn should_move_device_between_clients() {
        let mut device = valid_device();
        let new_owner = ClientId::new();
        device.update_client(new_owner);
        assert_eq!(device.client_id, new_owner);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut device = valid_device();
        device.activate();
        let json = serde_json::to_string(&device).unwrap();
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, device);
    }
}
