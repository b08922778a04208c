//! Shared application state for axum handlers.

use std::sync::Arc;

use devman_app::ports::{ClientRepository, DeviceRepository, EventRepository};
use devman_app::services::client_service::ClientService;
use devman_app::services::dashboard_service::DashboardService;
use devman_app::services::device_service::DeviceService;
use devman_app::services::event_service::EventService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying repositories themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<CR, DR, ER> {
    /// Client CRUD service.
    pub client_service: Arc<ClientService<CR>>,
    /// Device CRUD service.
    pub device_service: Arc<DeviceService<CR, DR>>,
    /// Event recording/query service.
    pub event_service: Arc<EventService<DR, ER>>,
    /// Event-count summary service.
    pub dashboard_service: Arc<DashboardService<ER>>,
}

impl<CR, DR, ER> Clone for AppState<CR, DR, ER> {
    fn clone(&self) -> Self {
        Self {
            client_service: Arc::clone(&self.client_service),
            device_service: Arc::clone(&self.device_service),
            event_service: Arc::clone(&self.event_service),
            dashboard_service: Arc::clone(&self.dashboard_service),
        }
    }
}

impl<CR, DR, ER> AppState<CR, DR, ER>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        client_service: ClientService<CR>,
        device_service: DeviceService<CR, DR>,
        event_service: EventService<DR, ER>,
        dashboard_service: DashboardService<ER>,
    ) -> Self {
        Self {
            client_service: Arc::new(client_service),
            device_service: Arc::new(device_service),
            event_service: Arc::new(event_service),
            dashboard_service: Arc::new(dashboard_service),
        }
    }
}
