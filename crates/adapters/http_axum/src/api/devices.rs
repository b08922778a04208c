//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devman_app::ports::{ClientRepository, DeviceRepository, EventRepository};
use devman_app::services::device_service::UpdateDevice;
use devman_domain::device::Device;
use devman_domain::id::{ClientId, DeviceId};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a device.
#[derive(Deserialize)]
pub struct CreateDeviceRequest {
    pub serial: String,
    pub imei: String,
    pub client_id: String,
}

/// Request body for updating a device. Absent fields are left untouched.
#[derive(Deserialize)]
pub struct UpdateDeviceRequest {
    pub serial: Option<String>,
    pub imei: Option<String>,
    pub client_id: Option<String>,
}

/// Possible responses from the list-by-client endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Device>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/clients/{id}/devices`
pub async fn list_by_client<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&id)?;
    let devices = state
        .device_service
        .get_devices_by_client(client_id)
        .await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{id}`
pub async fn get<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let device_id: DeviceId = parse_id(&id)?;
    let device = state.device_service.get_device(device_id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices`
pub async fn create<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&req.client_id)?;
    let created = state
        .device_service
        .create_device(&req.serial, &req.imei, client_id)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/devices/{id}`
pub async fn update<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDeviceRequest>,
) -> Result<UpdateResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let device_id: DeviceId = parse_id(&id)?;
    let client_id = req
        .client_id
        .as_deref()
        .map(parse_id::<ClientId>)
        .transpose()?;

    let changes = UpdateDevice {
        serial: req.serial,
        imei: req.imei,
        client_id,
    };
    let updated = state.device_service.update_device(device_id, changes).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/devices/{id}`
pub async fn delete<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let device_id: DeviceId = parse_id(&id)?;
    state.device_service.delete_device(device_id).await?;
    Ok(DeleteResponse::NoContent)
}
