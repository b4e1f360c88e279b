use axum::routing::get;
use axum::Router;

use crate::handlers::{reading, reservoir};
use crate::state::AppState;

/// Routes mounted at `/reservoirs`.
///
/// ```text
/// GET /                 -> list_reservoirs
/// GET /{id}             -> get_reservoir
/// GET /{id}/readings    -> list_for_reservoir
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservoir::list_reservoirs))
        .route("/{id}", get(reservoir::get_reservoir))
        .route("/{id}/readings", get(reading::list_for_reservoir))
}
