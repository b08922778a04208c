//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod clients;
#[allow(clippy::missing_errors_doc)]
pub mod dashboard;
#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod events;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use devman_app::ports::{ClientRepository, DeviceRepository, EventRepository};
use devman_domain::error::{DevManError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path segment into a typed id; a malformed UUID is the caller's
/// fault, not a missing resource.
pub(crate) fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr,
{
    T::from_str(raw).map_err(|_| ApiError::from(DevManError::from(ValidationError::InvalidId)))
}

/// Build the `/api` sub-router.
pub fn routes<CR, DR, ER>() -> Router<AppState<CR, DR, ER>>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    Router::new()
        // Clients
        .route(
            "/clients",
            get(clients::list::<CR, DR, ER>).post(clients::create::<CR, DR, ER>),
        )
        .route(
            "/clients/{id}",
            get(clients::get::<CR, DR, ER>)
                .put(clients::update::<CR, DR, ER>)
                .delete(clients::delete::<CR, DR, ER>),
        )
        .route(
            "/clients/{id}/devices",
            get(devices::list_by_client::<CR, DR, ER>),
        )
        // Devices
        .route("/devices", post(devices::create::<CR, DR, ER>))
        .route(
            "/devices/{id}",
            get(devices::get::<CR, DR, ER>)
                .put(devices::update::<CR, DR, ER>)
                .delete(devices::delete::<CR, DR, ER>),
        )
        // Events
        .route(
            "/devices/{id}/events",
            get(events::list::<CR, DR, ER>).post(events::create::<CR, DR, ER>),
        )
        // Dashboard
        .route("/dashboard", get(dashboard::get::<CR, DR, ER>))
}
