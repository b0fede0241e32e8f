use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_by_id::{
    GetWishlistEntryByIdParams, GetWishlistEntryByIdUseCase,
};

pub struct GetWishlistEntryByIdUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistEntryByIdUseCase for GetWishlistEntryByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetWishlistEntryByIdParams,
    ) -> Result<WishlistEntry, WishlistError> {
        self.logger
            .debug(&format!("Fetching wishlist entry: {}", params.id));

        let entry = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound,
                other => WishlistError::Repository(other),
            })?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub WishlistRepo {}

        #[async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<WishlistEntry, RepositoryError>;
            async fn find_by_product_id(&self, product_id: Uuid, user_id: &UserId) -> Result<Option<WishlistEntry>, RepositoryError>;
            async fn save(&self, entry: &WishlistEntry) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_entry_when_owned_by_caller() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_get_by_id().returning(|_, uid| {
            let product = Product::new(NewProductProps {
                name: "Ceramic Teapot".to_string(),
                description: String::new(),
                price: BigDecimal::from(18),
                image_url: String::new(),
                stock: 4,
                is_active: true,
                category: String::new(),
            })
            .unwrap();
            Ok(WishlistEntry::new(*uid, product))
        });

        let use_case = GetWishlistEntryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetWishlistEntryByIdParams {
                id: Uuid::new_v4(),
                user_id,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().user_id, user_id);
    }

    #[tokio::test]
    async fn should_return_not_found_for_other_users_entry() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = GetWishlistEntryByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetWishlistEntryByIdParams {
                id: Uuid::new_v4(),
                user_id: UserId::new(Uuid::new_v4()),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), WishlistError::NotFound));
    }
}
