//! JSON REST handler for the dashboard summary.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use devman_app::ports::{ClientRepository, DeviceRepository, EventRepository};
use devman_app::services::dashboard_service::DashboardSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the dashboard endpoint.
pub enum GetResponse {
    Ok(Json<DashboardSummary>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/dashboard`
pub async fn get<CR, DR, ER>(
    State(state): State<AppState<CR, DR, ER>>,
) -> Result<GetResponse, ApiError>
where
    CR: ClientRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    ER: EventRepository + Send + Sync + 'static,
{
    let summary = state.dashboard_service.get_dashboard().await?;
    Ok(GetResponse::Ok(Json(summary)))
}
