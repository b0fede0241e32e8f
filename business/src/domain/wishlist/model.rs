use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// One wishlist entry per (user, product) pair; uniqueness is enforced by
/// the repository.
#[derive(Debug, Clone)]
pub struct WishlistEntry {
    pub id: Uuid,
    pub user_id: UserId,
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn new(user_id: UserId, product: Product) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            product,
            added_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        product: Product,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            product,
            added_at,
        }
    }
}
