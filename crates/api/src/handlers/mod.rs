pub mod favorite;
pub mod reading;
pub mod reservoir;
pub mod user;
