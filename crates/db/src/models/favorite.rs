//! Favorites join between users and reservoirs.

use aquawatch_core::types::DbId;
use serde::Deserialize;

/// DTO for marking a reservoir as a user's favorite.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFavorite {
    pub user_id: DbId,
    pub reservoir_id: DbId,
}
