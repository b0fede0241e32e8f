use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        let existing = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Updating order status: {} -> {}",
            existing.status, params.status
        ));

        let updated = Order::from_repository(
            existing.id,
            existing.user_id,
            existing.ordered_item,
            params.status,
            existing.total_price,
            existing.created_at,
        );

        self.repository.save(&updated).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
            async fn place(&self, user_id: &UserId, product_id: Uuid) -> Result<Option<Order>, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
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

    fn sample_order(user_id: UserId) -> Order {
        let product = Product::new(NewProductProps {
            name: "Mug".to_string(),
            description: String::new(),
            price: BigDecimal::from_str("4.50").unwrap(),
            image_url: String::new(),
            stock: 9,
            is_active: true,
            category: String::new(),
        })
        .unwrap();
        Order::place(user_id, product)
    }

    #[tokio::test]
    async fn should_store_status_verbatim() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, uid| Ok(sample_order(*uid)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        // Any string is accepted, including values outside the usual
        // lifecycle vocabulary.
        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                user_id,
                status: "teleported".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().status, "teleported");
    }

    #[tokio::test]
    async fn should_keep_other_fields_unchanged() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, uid| Ok(sample_order(*uid)));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                user_id,
                status: "shipped".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let updated = result.unwrap();
        assert_eq!(updated.total_price, BigDecimal::from_str("4.50").unwrap());
        assert_eq!(updated.ordered_item.name, "Mug");
    }

    #[tokio::test]
    async fn should_return_not_found_for_other_users_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                id: Uuid::new_v4(),
                user_id: UserId::new(Uuid::new_v4()),
                status: "shipped".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
