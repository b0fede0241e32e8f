use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;

pub struct GetWishlistEntryByIdParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetWishlistEntryByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetWishlistEntryByIdParams,
    ) -> Result<WishlistEntry, WishlistError>;
}
