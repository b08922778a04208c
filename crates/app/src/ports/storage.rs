//! Storage ports — repository traits for persistence.
//!
//! All operations are asynchronous; cancellation is expressed by dropping
//! the returned future. Every write is independently committed — no
//! multi-entity transactions are modelled at this boundary.

use std::future::Future;

use devman_domain::client::Client;
use devman_domain::device::Device;
use devman_domain::error::DevManError;
use devman_domain::event::Event;
use devman_domain::id::{ClientId, DeviceId};
use devman_domain::time::Timestamp;

/// Persistence contract for [`Client`]s.
pub trait ClientRepository {
    /// Fetch a client by id, active or not.
    fn get_by_id(
        &self,
        id: ClientId,
    ) -> impl Future<Output = Result<Option<Client>, DevManError>> + Send;

    /// Fetch an **active** client by (lower-case) email.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Client>, DevManError>> + Send;

    /// Fetch all **active** clients.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Client>, DevManError>> + Send;

    /// Persist a new client.
    fn create(&self, client: Client) -> impl Future<Output = Result<Client, DevManError>> + Send;

    /// Persist changes to an existing client.
    fn update(&self, client: Client) -> impl Future<Output = Result<Client, DevManError>> + Send;

    /// Remove a client row. Owned devices (and their events) go with it.
    fn delete(&self, id: ClientId) -> impl Future<Output = Result<(), DevManError>> + Send;
}

/// Persistence contract for [`Device`]s.
pub trait DeviceRepository {
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevManError>> + Send;

    /// Fetch a device by serial number.
    fn get_by_serial(
        &self,
        serial: &str,
    ) -> impl Future<Output = Result<Option<Device>, DevManError>> + Send;

    /// Fetch every device owned by the given client.
    fn get_by_client_id(
        &self,
        client_id: ClientId,
    ) -> impl Future<Output = Result<Vec<Device>, DevManError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DevManError>> + Send;

    fn create(&self, device: Device) -> impl Future<Output = Result<Device, DevManError>> + Send;

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DevManError>> + Send;

    /// Remove a device row. Owned events go with it.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DevManError>> + Send;
}

/// Persistence contract for [`Event`]s. Append and query only — events are
/// immutable and never deleted individually.
pub trait EventRepository {
    /// Persist a new event.
    fn create(&self, event: Event) -> impl Future<Output = Result<Event, DevManError>> + Send;

    /// Events for a device within `[start, end]` (inclusive), newest first.
    fn get_by_device_id(
        &self,
        device_id: DeviceId,
        start: Timestamp,
        end: Timestamp,
    ) -> impl Future<Output = Result<Vec<Event>, DevManError>> + Send;

    /// Events recorded within the last `days` days, newest first.
    fn get_from_last_days(
        &self,
        days: u32,
    ) -> impl Future<Output = Result<Vec<Event>, DevManError>> + Send;
}
