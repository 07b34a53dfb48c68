use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use konsul_core::models::{ConsultationRecord, ConsultationStatus, ConsultationUpdate};
use konsul_db::models::{ListPage, ListParams, Statistics};

use crate::auth::AdminAuth;
use crate::handlers::{ApiError, Envelope};
use crate::AppState;

pub async fn list(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListPage>, ApiError> {
    Ok(Json(state.service.list_consultations(params).await?))
}

pub async fn get(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConsultationRecord>, ApiError> {
    Ok(Json(state.service.get_consultation(id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub data: ConsultationUpdate,
    /// Optimistic-concurrency token: the `updatedAt` the client last saw.
    #[serde(default)]
    pub expected_updated_at: Option<DateTime<Utc>>,
}

pub async fn update(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<Envelope<ConsultationRecord>>, ApiError> {
    let record = state
        .service
        .update_consultation(id, request.data, request.expected_updated_at)
        .await?;
    Ok(Json(Envelope::ok(
        "Data konsultasi berhasil diperbarui",
        record,
    )))
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: ConsultationStatus,
}

pub async fn update_status(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Envelope<ConsultationRecord>>, ApiError> {
    let record = state.service.update_status(id, request.status).await?;
    Ok(Json(Envelope::ok(
        format!("Status berhasil diubah menjadi {}", request.status),
        record,
    )))
}

pub async fn delete(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    state.service.delete_consultation(id).await?;
    Ok(Json(Envelope::ok("Data konsultasi berhasil dihapus", ())))
}

pub async fn statistics(
    _auth: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Statistics>, ApiError> {
    Ok(Json(state.service.statistics().await?))
}
