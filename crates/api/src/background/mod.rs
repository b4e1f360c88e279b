//! Background services spawned at startup.

pub mod alerts;
