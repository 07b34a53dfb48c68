use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use konsul_service::Error as ServiceError;

/// Maps service failures onto HTTP statuses with the standard envelope.
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) | ServiceError::BusinessRule(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }

        // Validation failures additionally carry the per-field errors so
        // the form can highlight them.
        let errors = match &self.0 {
            ServiceError::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };

        let body = json!({
            "success": false,
            "message": self.0.to_string(),
            "errors": errors,
        });

        (status, Json(body)).into_response()
    }
}
