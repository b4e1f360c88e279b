use axum::routing::post;
use axum::Router;

use crate::handlers::reading;
use crate::state::AppState;

/// Routes mounted at `/readings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(reading::ingest_reading))
}
