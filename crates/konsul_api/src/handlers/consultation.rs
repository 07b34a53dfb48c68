use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use konsul_core::models::ConsultationRecord;
use konsul_service::submission::IntakeRequest;

use crate::handlers::{ApiError, Envelope};
use crate::AppState;

/// Public intake: one insert carrying the whole form plus the signature.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<IntakeRequest>,
) -> Result<(StatusCode, Json<Envelope<ConsultationRecord>>), ApiError> {
    let record = state.service.submit_consultation(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Form konsultasi berhasil disimpan", record)),
    ))
}
