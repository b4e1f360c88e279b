use std::sync::Arc;

use aquawatch_events::AlertQueue;

use crate::config::ServerConfig;
use crate::ingest::ReadingStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: aquawatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Write side of reading ingestion.
    pub store: Arc<dyn ReadingStore>,
    /// Hand-off to the background alert dispatcher.
    pub alerts: AlertQueue,
}
