//! JSON REST handlers for device events.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::DateTime;
use serde::Deserialize;

use devman_app::ports::{ClientRepository, DeviceRepository, EventRepository};
use devman_domain::event::{Event, EventType};
use devman_domain::id::DeviceId;
use devman_domain::time::{self, Timestamp};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for recording an event. The timestamp is assigned
/// server-side.
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub event_type: EventType,
}

/// Time-range query for the list endpoint (RFC 3339 timestamps). Both
/// bounds are inclusive and optional; the default range spans everything
/// up to now.
#[derive(Deserialize)]
pub struct RangeQuery {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Event>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/devices/{id}/events?from=&to=`
pub async fn list<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
    Query(range): Query<RangeQuery>,
) -> Result<ListResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let device_id: DeviceId = parse_id(&id)?;
    let from = range.from.unwrap_or(DateTime::UNIX_EPOCH);
    let to = range.to.unwrap_or_else(time::now);

    let events = state
        .event_service
        .get_events_by_device(device_id, from, to)
        .await?;
    Ok(ListResponse::Ok(Json(events)))
}

/// `POST /api/devices/{id}/events`
pub async fn create<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
    Path(id): Path<String>,
    Json(req): Json<CreateEventRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let device_id: DeviceId = parse_id(&id)?;
    let created = state
        .event_service
        .create_event(device_id, req.event_type)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}
