//! Sensor reading ingestion and alert hand-off.
//!
//! The flow for one reading is strictly linear:
//!
//! 1. stamp it with the server's local date and time,
//! 2. persist it (failure aborts the request),
//! 3. link it to its reservoir (failure is logged, the reading stays),
//! 4. compare the raw level against the threshold,
//! 5. if exceeded, queue an [`AlertJob`] for the background dispatcher.
//!
//! Steps 3 to 5 never change what the caller sees once step 2 succeeded.

use aquawatch_core::alert::AlertThreshold;
use aquawatch_core::reading::ReadingTimestamp;
use aquawatch_core::types::DbId;
use aquawatch_db::models::reading::CreateReading;
use aquawatch_db::repositories::ReadingRepo;
use aquawatch_db::DbPool;
use aquawatch_events::{AlertJob, AlertQueue};
use async_trait::async_trait;

/// Write side of reading ingestion.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Insert a reading and return its generated ID.
    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, sqlx::Error>;

    /// Link a stored reading to a reservoir.
    async fn link_reading(&self, reading_id: DbId, reservoir_id: DbId) -> Result<(), sqlx::Error>;
}

/// [`ReadingStore`] backed by the shared PostgreSQL pool.
pub struct PgReadingStore {
    pool: DbPool,
}

impl PgReadingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingStore for PgReadingStore {
    async fn insert_reading(&self, input: &CreateReading) -> Result<DbId, sqlx::Error> {
        ReadingRepo::create(&self.pool, input).await.map(|r| r.id)
    }

    async fn link_reading(&self, reading_id: DbId, reservoir_id: DbId) -> Result<(), sqlx::Error> {
        ReadingRepo::link_to_reservoir(&self.pool, reading_id, reservoir_id).await
    }
}

/// A validated reading about to be ingested.
#[derive(Debug, Clone, Copy)]
pub struct NewReading {
    pub level: f64,
    pub reservoir_id: DbId,
    pub stamp: ReadingTimestamp,
}

/// What happened after the reading was persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOutcome {
    pub reading_id: DbId,
    pub linked: bool,
    pub alert_queued: bool,
}

/// Persist a reading, link it and queue an alert if needed.
///
/// Only a failure to insert the reading is returned as an error.
pub async fn ingest(
    store: &dyn ReadingStore,
    alerts: &AlertQueue,
    threshold: AlertThreshold,
    reading: NewReading,
) -> Result<IngestOutcome, sqlx::Error> {
    let input = CreateReading {
        level: reading.level,
        reading_date: reading.stamp.date,
        reading_time: reading.stamp.time,
    };

    let reading_id = store.insert_reading(&input).await.map_err(|e| {
        tracing::error!(error = %e, level = reading.level, "Failed to insert reading");
        e
    })?;

    let linked = match store.link_reading(reading_id, reading.reservoir_id).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                error = %e,
                reading_id,
                reservoir_id = reading.reservoir_id,
                "Failed to link reading to reservoir"
            );
            false
        }
    };

    let alert_queued = threshold.is_exceeded_by(reading.level)
        && alerts.enqueue(AlertJob {
            reservoir_id: reading.reservoir_id,
            reading_id,
            level: reading.level,
        });

    tracing::info!(
        reading_id,
        reservoir_id = reading.reservoir_id,
        level = reading.level,
        date = %reading.stamp.date_string(),
        time = %reading.stamp.time_string(),
        linked,
        alert_queued,
        "Reading ingested"
    );

    Ok(IngestOutcome {
        reading_id,
        linked,
        alert_queued,
    })
}
