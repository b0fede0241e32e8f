use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::WishlistEntry;

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Returns only the caller's own entries.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId)
    -> Result<WishlistEntry, RepositoryError>;
    async fn find_by_product_id(
        &self,
        product_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<WishlistEntry>, RepositoryError>;
    /// Fails with `RepositoryError::Duplicated` when an entry for the same
    /// (user, product) pair already exists.
    async fn save(&self, entry: &WishlistEntry) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
