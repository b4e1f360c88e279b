//! Repository for the `reservoirs` table.

use aquawatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservoir::{CreateReservoir, Reservoir, ReservoirSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, location, capacity_hm3, built_on, height_m, created_at, updated_at";

/// Provides CRUD operations for reservoirs.
pub struct ReservoirRepo;

impl ReservoirRepo {
    /// Insert a new reservoir, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReservoir) -> Result<Reservoir, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservoirs (name, location, capacity_hm3, built_on, height_m)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservoir>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.capacity_hm3)
            .bind(input.built_on)
            .bind(input.height_m)
            .fetch_one(pool)
            .await
    }

    /// Find a reservoir by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservoir>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservoirs WHERE id = $1");
        sqlx::query_as::<_, Reservoir>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reservoirs ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<ReservoirSummary>, sqlx::Error> {
        sqlx::query_as::<_, ReservoirSummary>(
            "SELECT id, name, location FROM reservoirs ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
