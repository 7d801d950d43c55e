//! Request handlers. Thin delegation to the core boundary operations; no
//! query or storage logic lives here.

use crate::envelope::{ApiError, Envelope};
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use logview_core::{LogFilter, LogRecord, LogRecordDraft};

/// `POST /api/create` — validate and append one record.
pub async fn create_log(
    State(state): State<AppState>,
    Json(draft): Json<LogRecordDraft>,
) -> Result<(StatusCode, Json<Envelope<LogRecord>>), ApiError> {
    let record = state.store.add_log(draft).await?;
    tracing::debug!(level = %record.level, resource = %record.resource_id, "log created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Log created successfully", record)),
    ))
}

/// `GET /api/get` — return the records matching the query-string filter,
/// most recent first.
pub async fn get_logs(
    State(state): State<AppState>,
    Query(filter): Query<LogFilter>,
) -> Result<Json<Envelope<Vec<LogRecord>>>, ApiError> {
    let records = state.store.get_logs(&filter).await?;
    Ok(Json(Envelope::ok("Logs fetched successfully", records)))
}

/// `GET /health`
pub async fn health() -> Json<Envelope<()>> {
    Json(Envelope::message("Healthy"))
}
