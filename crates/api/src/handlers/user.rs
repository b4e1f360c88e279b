//! Handlers for the `/users` resource.
//!
//! Users only own favorites and receive alerts; there are no credentials.

use aquawatch_db::models::user::{CreateUser, User};
use aquawatch_db::repositories::UserRepo;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let data = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/users
///
/// Returns 201 with the created user, 409 if the email is already taken.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let input = normalize(body)?;
    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// Trim every field and reject blank required ones.
fn normalize(input: CreateUser) -> AppResult<CreateUser> {
    let required = |value: String, field: &str| {
        let value = value.trim().to_string();
        if value.is_empty() {
            Err(AppError::BadRequest(format!("{field} is required")))
        } else {
            Ok(value)
        }
    };
    Ok(CreateUser {
        first_name: required(input.first_name, "first_name")?,
        last_name: required(input.last_name, "last_name")?,
        second_last_name: input
            .second_last_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        email: required(input.email, "email")?,
    })
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmailCheck {
    pub count: i64,
    pub exists: bool,
}

/// GET /api/v1/users/check-email?email=
pub async fn check_email(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> AppResult<Json<DataResponse<EmailCheck>>> {
    let email = params
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("email is required".to_string()))?;
    let count = UserRepo::count_by_email(&state.pool, email.trim()).await?;
    Ok(Json(DataResponse {
        data: EmailCheck {
            count,
            exists: count > 0,
        },
    }))
}
