//! Device service — use-cases for managing devices.

use devman_domain::device::Device;
use devman_domain::error::{ConflictError, DevManError, EmptyResultError, NotFoundError};
use devman_domain::id::{ClientId, DeviceId};
use devman_domain::value::{Imei, SerialNumber};

use crate::ports::{ClientRepository, DeviceRepository};

/// Field changes for [`DeviceService::update_device`]. `None` fields are
/// left untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateDevice {
    pub serial: Option<String>,
    pub imei: Option<String>,
    pub client_id: Option<ClientId>,
}

/// Application service for device use-cases.
///
/// Needs the client repository as well: devices can only be created for
/// (or moved to) existing clients.
pub struct DeviceService<CR, DR> {
    clients: CR,
    devices: DR,
}

impl<CR, DR> DeviceService<CR, DR>
where
    CR: ClientRepository,
    DR: DeviceRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(clients: CR, devices: DR) -> Self {
        Self { clients, devices }
    }

    /// Register and activate a new device for a client.
    ///
    /// The owning client must exist, and the (validated) serial and IMEI
    /// must be unused across all devices. Both checks are advisory
    /// pre-checks — the storage unique indexes are the final authority.
    /// Freshly created devices are activated immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the client is missing,
    /// [`DevManError::Validation`] for malformed input,
    /// [`DevManError::Conflict`] for duplicate serial/IMEI, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self), fields(serial))]
    pub async fn create_device(
        &self,
        serial: &str,
        imei: &str,
        client_id: ClientId,
    ) -> Result<Device, DevManError> {
        if self.clients.get_by_id(client_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Client",
                id: client_id.to_string(),
            }
            .into());
        }

        let mut device = Device::create(serial, imei, client_id)?;

        let all = self.devices.get_all().await?;
        if all.iter().any(|d| d.serial == device.serial) {
            return Err(ConflictError::DuplicateSerialNumber.into());
        }
        if all.iter().any(|d| d.imei == device.imei) {
            return Err(ConflictError::DuplicateImei.into());
        }

        device.activate();

        self.devices.create(device).await
    }

    /// Update an existing device.
    ///
    /// A provided serial or IMEI is validated and then checked for
    /// uniqueness against all *other* devices — re-submitting the device's
    /// own current value is not a conflict. Moving the device requires the
    /// target client to exist. Persists exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the device (or target
    /// client) is missing, [`DevManError::Validation`] for malformed
    /// input, [`DevManError::Conflict`] for duplicates, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        changes: UpdateDevice,
    ) -> Result<Device, DevManError> {
        let mut device = self.get_device(id).await?;

        let others: Vec<Device> = self
            .devices
            .get_all()
            .await?
            .into_iter()
            .filter(|d| d.id != device.id)
            .collect();

        if let Some(raw) = changes.serial {
            let serial = SerialNumber::new(raw)?;
            if others.iter().any(|d| d.serial == serial) {
                return Err(ConflictError::DuplicateSerialNumber.into());
            }
            device.update_serial(serial);
        }

        if let Some(raw) = changes.imei {
            let imei = Imei::new(raw)?;
            if others.iter().any(|d| d.imei == imei) {
                return Err(ConflictError::DuplicateImei.into());
            }
            device.update_imei(imei);
        }

        if let Some(client_id) = changes.client_id {
            if self.clients.get_by_id(client_id).await?.is_none() {
                return Err(NotFoundError {
                    entity: "Client",
                    id: client_id.to_string(),
                }
                .into());
            }
            device.update_client(client_id);
        }

        self.devices.update(device).await
    }

    /// Remove a device (hard delete). Its events are removed with it.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the device is missing, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), DevManError> {
        self.get_device(id).await?;
        self.devices.delete(id).await
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DevManError> {
        self.devices.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices owned by a client.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::Empty`] when the client owns no devices, or
    /// a storage error from the repository.
    pub async fn get_devices_by_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Device>, DevManError> {
        let devices = self.devices.get_by_client_id(client_id).await?;
        if devices.is_empty() {
            return Err(EmptyResultError::NoDevicesForClient.into());
        }
        Ok(devices)
    }
}
