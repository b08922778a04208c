//! JSON REST handlers for clients.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devman_app::ports::{ClientRepository, DeviceRepository, EventRepository};
use devman_app::services::client_service::UpdateClient;
use devman_domain::client::Client;
use devman_domain::id::ClientId;

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a client.
#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Request body for updating a client. Absent fields are left untouched.
#[derive(Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<bool>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Client>>),
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
    Ok(Json<Client>),
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
    Created(Json<Client>),
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
    Ok(Json<Client>),
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

/// `GET /api/clients`
pub async fn list<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
) -> Result<ListResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let clients = state.client_service.list_clients().await?;
    Ok(ListResponse::Ok(Json(clients)))
}

/// `GET /api/clients/{id}`
pub async fn get<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&id)?;
    let client = state.client_service.get_client(client_id).await?;
    Ok(GetResponse::Ok(Json(client)))
}

/// `POST /api/clients`
pub async fn create<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Json(req): Json<CreateClientRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let created = state
        .client_service
        .create_client(&req.name, &req.email, req.phone.as_deref())
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/clients/{id}`
pub async fn update<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateClientRequest>,
) -> Result<UpdateResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&id)?;
    let changes = UpdateClient {
        name: req.name,
        email: req.email,
        phone: req.phone,
        status: req.status,
    };
    let updated = state.client_service.update_client(client_id, changes).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/clients/{id}`
pub async fn delete<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let client_id: ClientId = parse_id(&id)?;
    state.client_service.delete_client(client_id).await?;
    Ok(DeleteResponse::NoContent)
}
