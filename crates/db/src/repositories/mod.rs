//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod favorite_repo;
pub mod reading_repo;
pub mod reservoir_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use reading_repo::ReadingRepo;
pub use reservoir_repo::ReservoirRepo;
pub use user_repo::UserRepo;
