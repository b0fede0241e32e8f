use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;

pub struct RemoveWishlistEntryParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait RemoveWishlistEntryUseCase: Send + Sync {
    async fn execute(&self, params: RemoveWishlistEntryParams) -> Result<(), WishlistError>;
}
