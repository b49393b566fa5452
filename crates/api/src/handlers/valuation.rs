//! Valuation handlers: the local comparative engine and the optional
//! narrative service.

use axum::extract::State;
use axum::Json;

use laudo_core::property::SubjectProperty;
use laudo_core::report::ReportResult;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/valuations
///
/// Runs the local comparative valuation. A subject with no matching
/// comparables still succeeds, yielding an inconclusive report.
pub async fn valuate(
    State(state): State<AppState>,
    Json(subject): Json<SubjectProperty>,
) -> AppResult<Json<DataResponse<ReportResult>>> {
    let report = state.engine.valuate(&subject).await?;
    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/valuations/narrative
///
/// Generates a narrative appraisal through the external service. Fails
/// with 503 when the service is unreachable or not configured; the local
/// endpoint above remains available either way.
pub async fn valuate_narrative(
    State(state): State<AppState>,
    Json(subject): Json<SubjectProperty>,
) -> AppResult<Json<DataResponse<ReportResult>>> {
    subject.validate()?;

    let report = state.narrative.generate_report(&subject).await?;

    tracing::info!(
        city = %subject.city,
        sources = report.sources.len(),
        "Narrative report generated",
    );

    Ok(Json(DataResponse { data: report }))
}
