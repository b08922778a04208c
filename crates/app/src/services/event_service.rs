//! Event service — recording and querying device lifecycle events.

use devman_domain::error::{DevManError, NotFoundError};
use devman_domain::event::{Event, EventType};
use devman_domain::id::DeviceId;
use devman_domain::time::Timestamp;

use crate::ports::{DeviceRepository, EventRepository};

/// Application service for event use-cases. Events are append-only; there
/// are no update or delete use-cases.
pub struct EventService<DR, ER> {
    devices: DR,
    events: ER,
}

impl<DR, ER> EventService<DR, ER>
where
    DR: DeviceRepository,
    ER: EventRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(devices: DR, events: ER) -> Self {
        Self { devices, events }
    }

    /// Record a lifecycle event for an existing device.
    ///
    /// The timestamp is fixed at construction; callers cannot supply it.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the device is missing, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create_event(
        &self,
        device_id: DeviceId,
        event_type: EventType,
    ) -> Result<Event, DevManError> {
        self.ensure_device_exists(device_id).await?;
        self.events.create(Event::new(device_id, event_type)).await
    }

    /// Fetch events for a device within `[from, to]` (inclusive), newest
    /// first. An empty window is a valid empty success.
    ///
    /// # Errors
    ///
    /// Returns [`DevManError::NotFound`] when the device is missing, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_events_by_device(
        &self,
        device_id: DeviceId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Event>, DevManError> {
        self.ensure_device_exists(device_id).await?;
        self.events.get_by_device_id(device_id, from, to).await
    }

    async fn ensure_device_exists(&self, device_id: DeviceId) -> Result<(), DevManError> {
        if self.devices.get_by_id(device_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Device",
                id: device_id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
