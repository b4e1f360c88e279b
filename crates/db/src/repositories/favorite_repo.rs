//! Repository for the `reservoir_favorites` join table.
//!
//! A favorite doubles as an alert subscription: every user who marked a
//! reservoir as favorite is emailed when one of its readings crosses the
//! alert threshold.

use aquawatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite::CreateFavorite;
use crate::models::reservoir::ReservoirSummary;

/// Provides favorite management and subscriber lookup.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Mark a reservoir as favorite for a user.
    ///
    /// A repeated pair violates `uq_reservoir_favorites_user_reservoir`.
    pub async fn add(pool: &PgPool, input: &CreateFavorite) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO reservoir_favorites (user_id, reservoir_id) VALUES ($1, $2)")
            .bind(input.user_id)
            .bind(input.reservoir_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove a favorite. Returns `true` if a row was deleted.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        reservoir_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM reservoir_favorites WHERE user_id = $1 AND reservoir_id = $2",
        )
        .bind(user_id)
        .bind(reservoir_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Reservoirs a user has marked as favorite, ordered by reservoir ID.
    pub async fn list_reservoirs_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReservoirSummary>, sqlx::Error> {
        sqlx::query_as::<_, ReservoirSummary>(
            "SELECT r.id, r.name, r.location
             FROM reservoirs r
             JOIN reservoir_favorites f ON f.reservoir_id = r.id
             WHERE f.user_id = $1
             ORDER BY r.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Email addresses of every user subscribed to a reservoir.
    pub async fn subscriber_emails(
        pool: &PgPool,
        reservoir_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT u.email
             FROM users u
             JOIN reservoir_favorites f ON f.user_id = u.id
             WHERE f.reservoir_id = $1
             ORDER BY u.id ASC",
        )
        .bind(reservoir_id)
        .fetch_all(pool)
        .await
    }
}
