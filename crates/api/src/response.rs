//! Shared response envelope types for API handlers.
//!
//! Read endpoints wrap their payload in `{ "data": ... }`. The sensor-facing
//! ingestion endpoint keeps the flat `{ success, message, insertId }` shape
//! that deployed firmware already parses.

use aquawatch_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": true, "message": ... }` acknowledgement for mutations.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// Body returned once a reading has been persisted.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "insertId")]
    pub insert_id: DbId,
}
