use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;

pub struct AddWishlistEntryParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddWishlistEntryUseCase: Send + Sync {
    /// Idempotent per (user, product): re-adding returns the existing entry.
    async fn execute(&self, params: AddWishlistEntryParams)
    -> Result<WishlistEntry, WishlistError>;
}
