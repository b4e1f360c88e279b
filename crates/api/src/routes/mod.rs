pub mod favorite;
pub mod health;
pub mod reading;
pub mod reservoir;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /readings                          ingest a sensor reading (POST)
///
/// /reservoirs                        list
/// /reservoirs/{id}                   get
/// /reservoirs/{id}/readings?date=    readings for one day
///
/// /favorites?user_id=                list (GET)
/// /favorites                         add (POST)
/// /favorites?user_id=&reservoir_id=  remove (DELETE)
///
/// /users                             list (GET), register (POST)
/// /users/check-email?email=          count accounts using an email
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/readings", reading::router())
        .nest("/reservoirs", reservoir::router())
        .nest("/favorites", favorite::router())
        .nest("/users", user::router())
}
