//! Handlers for the `/reservoirs` resource.

use aquawatch_core::error::CoreError;
use aquawatch_core::types::DbId;
use aquawatch_db::models::reservoir::{Reservoir, ReservoirSummary};
use aquawatch_db::repositories::ReservoirRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reservoirs
pub async fn list_reservoirs(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ReservoirSummary>>>> {
    let data = ReservoirRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/reservoirs/{id}
pub async fn get_reservoir(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Reservoir>>> {
    let reservoir = ReservoirRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservoir",
            id,
        }))?;
    Ok(Json(DataResponse { data: reservoir }))
}
