//! Row types and DTOs, one module per table family.

pub mod favorite;
pub mod reading;
pub mod reservoir;
pub mod user;
