//! Reservoir entity model.

use aquawatch_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `reservoirs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservoir {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub capacity_hm3: Option<f64>,
    pub built_on: Option<NaiveDate>,
    pub height_m: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Compact listing shape (id, name, location).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservoirSummary {
    pub id: DbId,
    pub name: String,
    pub location: String,
}

/// DTO for creating a reservoir.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReservoir {
    pub name: String,
    pub location: String,
    pub capacity_hm3: Option<f64>,
    pub built_on: Option<NaiveDate>,
    pub height_m: Option<f64>,
}
