//! Handlers for sensor readings.

use aquawatch_core::reading::ReadingTimestamp;
use aquawatch_core::types::DbId;
use aquawatch_db::models::reading::ReservoirReading;
use aquawatch_db::repositories::ReadingRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::ingest::{self, NewReading};
use crate::response::{DataResponse, IngestResponse};
use crate::state::AppState;

/// Request body for `POST /readings`.
#[derive(Debug, Deserialize)]
pub struct IngestReading {
    /// Measured water level. Older sensor firmware sends `nivelDato`.
    #[serde(alias = "nivelDato")]
    pub level: Option<f64>,
    /// Reservoir the sensor belongs to; defaults to the configured target.
    pub reservoir_id: Option<DbId>,
}

/// POST /api/v1/readings
///
/// Store one sensor reading. Responds as soon as the reading is persisted;
/// linkage and alert delivery never affect the response.
pub async fn ingest_reading(
    State(state): State<AppState>,
    payload: Result<Json<IngestReading>, JsonRejection>,
) -> AppResult<Json<IngestResponse>> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let level = body
        .level
        .ok_or_else(|| AppError::BadRequest("level is required".to_string()))?;

    let reading = NewReading {
        level,
        reservoir_id: body
            .reservoir_id
            .unwrap_or(state.config.alerts.target_reservoir_id),
        stamp: ReadingTimestamp::now(),
    };

    let outcome = ingest::ingest(
        state.store.as_ref(),
        &state.alerts,
        state.config.alerts.threshold,
        reading,
    )
    .await?;

    Ok(Json(IngestResponse {
        success: true,
        message: "Reading stored",
        insert_id: outcome.reading_id,
    }))
}

/// Query parameters for `GET /reservoirs/{id}/readings`.
#[derive(Debug, Deserialize)]
pub struct ReadingsQuery {
    /// Day to list, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// GET /api/v1/reservoirs/{id}/readings?date=YYYY-MM-DD
pub async fn list_for_reservoir(
    State(state): State<AppState>,
    Path(reservoir_id): Path<DbId>,
    Query(params): Query<ReadingsQuery>,
) -> AppResult<Json<DataResponse<Vec<ReservoirReading>>>> {
    let raw = params
        .date
        .ok_or_else(|| AppError::BadRequest("date query parameter is required".to_string()))?;
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("date must be YYYY-MM-DD, got '{raw}'")))?;

    let data = ReadingRepo::list_for_reservoir_on_date(&state.pool, reservoir_id, date).await?;
    Ok(Json(DataResponse { data }))
}
