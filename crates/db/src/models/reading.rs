//! Water-level reading model and DTOs.

use aquawatch_core::types::{DbId, Timestamp};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `readings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub level: f64,
    pub reading_date: NaiveDate,
    pub reading_time: NaiveTime,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a reading. Date and time are always server-assigned.
#[derive(Debug, Clone)]
pub struct CreateReading {
    pub level: f64,
    pub reading_date: NaiveDate,
    pub reading_time: NaiveTime,
}

/// A reading as listed for one reservoir on one day.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ReservoirReading {
    pub reading_id: DbId,
    pub level: f64,
    pub reading_date: NaiveDate,
    pub reading_time: NaiveTime,
}
