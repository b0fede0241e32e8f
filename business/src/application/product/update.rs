use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let name = params.name.unwrap_or(existing.name);
        let price = params.price.unwrap_or(existing.price);
        let stock = params.stock.unwrap_or(existing.stock);

        // Merged values go through the same checks as creation.
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if price < BigDecimal::from(0) {
            return Err(ProductError::PriceNegative);
        }
        if stock < 0 {
            return Err(ProductError::StockNegative);
        }

        let updated = Product::from_repository(
            existing.id,
            name,
            params.description.unwrap_or(existing.description),
            price,
            params.image_url.unwrap_or(existing.image_url),
            stock,
            params.is_active.unwrap_or(existing.is_active),
            params.category.unwrap_or(existing.category),
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_active_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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

    fn stored_product() -> Product {
        Product::new(NewProductProps {
            name: "Espresso Grinder".to_string(),
            description: "Burr grinder".to_string(),
            price: BigDecimal::from_str("120.00").unwrap(),
            image_url: "https://cdn.example.com/grinder.png".to_string(),
            stock: 4,
            is_active: true,
            category: "kitchen".to_string(),
        })
        .unwrap()
    }

    fn empty_params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: None,
            description: None,
            price: None,
            image_url: None,
            stock: None,
            is_active: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(stored_product()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                stock: Some(10),
                ..empty_params(Uuid::new_v4())
            })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.stock, 10);
        assert_eq!(updated.name, "Espresso Grinder");
        assert_eq!(updated.price, BigDecimal::from_str("120.00").unwrap());
        assert_eq!(updated.category, "kitchen");
    }

    #[tokio::test]
    async fn should_reject_negative_stock_on_update() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(stored_product()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                stock: Some(-1),
                ..empty_params(Uuid::new_v4())
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::StockNegative));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params(Uuid::new_v4())).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
