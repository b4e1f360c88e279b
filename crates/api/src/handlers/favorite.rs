//! Handlers for the `/favorites` resource.
//!
//! A favorite subscribes the user to water-level alerts for that reservoir.

use aquawatch_core::error::CoreError;
use aquawatch_core::types::DbId;
use aquawatch_db::models::favorite::CreateFavorite;
use aquawatch_db::models::reservoir::ReservoirSummary;
use aquawatch_db::repositories::FavoriteRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{Ack, DataResponse};
use crate::state::AppState;

/// Identifies one user/reservoir pair. Used both as JSON body and query.
#[derive(Debug, Deserialize)]
pub struct FavoriteParams {
    pub user_id: Option<DbId>,
    pub reservoir_id: Option<DbId>,
}

impl FavoriteParams {
    fn require_pair(&self) -> AppResult<CreateFavorite> {
        match (self.user_id, self.reservoir_id) {
            (Some(user_id), Some(reservoir_id)) => Ok(CreateFavorite {
                user_id,
                reservoir_id,
            }),
            _ => Err(AppError::BadRequest(
                "user_id and reservoir_id are required".to_string(),
            )),
        }
    }
}

/// GET /api/v1/favorites?user_id=
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<FavoriteParams>,
) -> AppResult<Json<DataResponse<Vec<ReservoirSummary>>>> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;
    let data = FavoriteRepo::list_reservoirs_for_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/favorites
///
/// Returns 201 on success and 409 if the pair is already a favorite.
pub async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteParams>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Ack>)> {
    let Json(params) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let input = params.require_pair()?;
    FavoriteRepo::add(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(Ack::ok("Reservoir added to favorites"))))
}

/// DELETE /api/v1/favorites?user_id=&reservoir_id=
pub async fn remove_favorite(
    State(state): State<AppState>,
    Query(params): Query<FavoriteParams>,
) -> AppResult<Json<Ack>> {
    let pair = params.require_pair()?;
    let removed = FavoriteRepo::remove(&state.pool, pair.user_id, pair.reservoir_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite reservoir",
            id: pair.reservoir_id,
        }));
    }
    Ok(Json(Ack::ok("Reservoir removed from favorites")))
}
