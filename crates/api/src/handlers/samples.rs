//! Comparable-sample CRUD handlers (the admin surface).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use laudo_core::sample::{ComparableSample, SampleInput};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/samples
///
/// Lists all stored samples, most recently created first.
pub async fn list_samples(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ComparableSample>>>> {
    let samples = state.store.list().await?;
    Ok(Json(DataResponse { data: samples }))
}

/// POST /api/v1/samples
pub async fn create_sample(
    State(state): State<AppState>,
    Json(input): Json<SampleInput>,
) -> AppResult<(StatusCode, Json<DataResponse<ComparableSample>>)> {
    let sample = state.store.create(input).await?;

    tracing::info!(id = %sample.id, city = %sample.city, "Sample created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: sample })))
}

/// PUT /api/v1/samples/{id}
///
/// Full replacement of an existing sample; the unit price is recomputed
/// from the submitted price and areas.
pub async fn update_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SampleInput>,
) -> AppResult<Json<DataResponse<ComparableSample>>> {
    let sample = state.store.update(id, input).await?;

    tracing::info!(id = %sample.id, "Sample updated");

    Ok(Json(DataResponse { data: sample }))
}

/// DELETE /api/v1/samples/{id}
///
/// Idempotent: deleting an unknown id is still 204.
pub async fn delete_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.store.delete(id).await?;

    tracing::info!(id = %id, "Sample deleted");

    Ok(StatusCode::NO_CONTENT)
}
