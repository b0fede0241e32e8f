use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove::{
    RemoveWishlistEntryParams, RemoveWishlistEntryUseCase,
};

pub struct RemoveWishlistEntryUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveWishlistEntryUseCase for RemoveWishlistEntryUseCaseImpl {
    async fn execute(&self, params: RemoveWishlistEntryParams) -> Result<(), WishlistError> {
        self.logger
            .info(&format!("Removing wishlist entry: {}", params.id));

        self.repository
            .delete(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound,
                other => WishlistError::Repository(other),
            })?;

        Ok(())
    }
}
