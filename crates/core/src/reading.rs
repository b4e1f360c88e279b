//! Server-side timestamping of sensor readings.
//!
//! Sensors never supply their own clock; every reading is stamped with the
//! server's local date and time at the moment the request is received.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};

/// Calendar date and whole-second time-of-day assigned to a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTimestamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ReadingTimestamp {
    /// Stamp a reading with the current local instant.
    pub fn now() -> Self {
        Self::from_local(Local::now())
    }

    /// Split a local instant into date and time, dropping sub-second precision.
    pub fn from_local(instant: DateTime<Local>) -> Self {
        let naive = instant.naive_local();
        let time = naive.time();
        let time = time.with_nanosecond(0).unwrap_or(time);
        Self {
            date: naive.date(),
            time,
        }
    }

    /// `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM:SS`.
    pub fn time_string(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}
