//! Repository for the `readings` and `reservoir_readings` tables.

use aquawatch_core::types::DbId;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::reading::{CreateReading, Reading, ReservoirReading};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, level, reading_date, reading_time, created_at, updated_at";

/// Provides persistence for sensor readings and their reservoir links.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a new reading, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReading) -> Result<Reading, sqlx::Error> {
        let query = format!(
            "INSERT INTO readings (level, reading_date, reading_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(input.level)
            .bind(input.reading_date)
            .bind(input.reading_time)
            .fetch_one(pool)
            .await
    }

    /// Find a reading by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM readings WHERE id = $1");
        sqlx::query_as::<_, Reading>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Link an existing reading to a reservoir.
    ///
    /// Runs as its own statement; callers decide what a failure means.
    pub async fn link_to_reservoir(
        pool: &PgPool,
        reading_id: DbId,
        reservoir_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO reservoir_readings (reading_id, reservoir_id) VALUES ($1, $2)")
            .bind(reading_id)
            .bind(reservoir_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Reservoir a reading is linked to, if any.
    pub async fn find_reservoir_id(
        pool: &PgPool,
        reading_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT reservoir_id FROM reservoir_readings WHERE reading_id = $1")
            .bind(reading_id)
            .fetch_optional(pool)
            .await
    }

    /// Readings linked to a reservoir on a given day, earliest first.
    pub async fn list_for_reservoir_on_date(
        pool: &PgPool,
        reservoir_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<ReservoirReading>, sqlx::Error> {
        sqlx::query_as::<_, ReservoirReading>(
            "SELECT r.id AS reading_id, r.level, r.reading_date, r.reading_time
             FROM readings r
             JOIN reservoir_readings rr ON rr.reading_id = r.id
             WHERE rr.reservoir_id = $1 AND r.reading_date = $2
             ORDER BY r.reading_time ASC, r.id ASC",
        )
        .bind(reservoir_id)
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
