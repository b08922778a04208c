//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use devman_domain::error::DevManError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    details: &'static [&'static str],
}

/// Maps [`DevManError`] to an HTTP response with appropriate status code.
///
/// Validation errors are the caller's fault (400). Missing entities and
/// empty listings are 404, uniqueness conflicts 409. Storage failures are
/// logged and collapsed into an opaque 500; their message never reaches
/// the client.
pub struct ApiError(DevManError);

impl From<DevManError> for ApiError {
    fn from(err: DevManError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DevManError::Validation(_) => StatusCode::BAD_REQUEST,
            DevManError::NotFound(_) | DevManError::Empty(_) => StatusCode::NOT_FOUND,
            DevManError::Conflict(_) => StatusCode::CONFLICT,
            DevManError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                        details: &[],
                    }),
                )
                    .into_response();
            }
        };

        let body = ErrorBody {
            error: self.0.to_string(),
            details: self.0.hints(),
        };

        (status, Json(body)).into_response()
    }
}
