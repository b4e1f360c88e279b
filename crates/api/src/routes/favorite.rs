use axum::routing::get;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(favorite::list_favorites)
            .post(favorite::add_favorite)
            .delete(favorite::remove_favorite),
    )
}
