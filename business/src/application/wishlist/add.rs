use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::add::{AddWishlistEntryParams, AddWishlistEntryUseCase};

pub struct AddWishlistEntryUseCaseImpl {
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddWishlistEntryUseCaseImpl {
    async fn existing_entry(
        &self,
        product_id: uuid::Uuid,
        user_id: &UserId,
    ) -> Result<Option<WishlistEntry>, WishlistError> {
        let found = self
            .wishlist_repository
            .find_by_product_id(product_id, user_id)
            .await?;
        Ok(found)
    }
}

#[async_trait]
impl AddWishlistEntryUseCase for AddWishlistEntryUseCaseImpl {
    async fn execute(
        &self,
        params: AddWishlistEntryParams,
    ) -> Result<WishlistEntry, WishlistError> {
        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::ProductNotFound,
                other => WishlistError::Repository(other),
            })?;

        if let Some(entry) = self.existing_entry(product.id, &params.user_id).await? {
            self.logger.debug(&format!(
                "Wishlist entry already present: user {} product {}",
                params.user_id, product.id
            ));
            return Ok(entry);
        }

        let entry = WishlistEntry::new(params.user_id, product);

        match self.wishlist_repository.save(&entry).await {
            Ok(()) => Ok(entry),
            // A concurrent add won the unique (user, product) constraint;
            // return its entry instead.
            Err(RepositoryError::Duplicated) => {
                match self
                    .existing_entry(params.product_id, &params.user_id)
                    .await?
                {
                    Some(existing) => Ok(existing),
                    None => Err(WishlistError::Repository(RepositoryError::Duplicated)),
                }
            }
            Err(other) => Err(WishlistError::Repository(other)),
        }
    }
}
