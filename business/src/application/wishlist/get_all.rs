use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_all::{
    GetAllWishlistEntriesParams, GetAllWishlistEntriesUseCase,
};

pub struct GetAllWishlistEntriesUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWishlistEntriesUseCase for GetAllWishlistEntriesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllWishlistEntriesParams,
    ) -> Result<Vec<WishlistEntry>, WishlistError> {
        self.logger
            .debug(&format!("Listing wishlist: user {}", params.user_id));

        let entries = self.repository.get_all(&params.user_id).await?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    fn sample_entry(user_id: UserId) -> WishlistEntry {
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
        WishlistEntry::new(user_id, product)
    }

    #[tokio::test]
    async fn should_return_callers_entries() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|uid| Ok(vec![sample_entry(*uid)]));

        let use_case = GetAllWishlistEntriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllWishlistEntriesParams { user_id })
            .await;

        assert!(result.is_ok());
        let entries = result.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, user_id);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_wishlist_empty() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_get_all().returning(|_| Ok(vec![]));

        let use_case = GetAllWishlistEntriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllWishlistEntriesParams {
                user_id: UserId::new(Uuid::new_v4()),
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }
}
