use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::product::repository::ProductRepository;

pub struct PlaceOrderUseCaseImpl {
    pub order_repository: Arc<dyn OrderRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let product = self
            .product_repository
            .get_active_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::ProductNotFound,
                other => OrderError::Repository(other),
            })?;

        if product.stock < 1 {
            return Err(OrderError::OutOfStock);
        }

        self.logger.info(&format!(
            "Placing order: user {} product {}",
            params.user_id, params.product_id
        ));

        // The repository decrements stock and inserts the order in one
        // transaction; `None` means another order took the last unit
        // between our stock check and the decrement.
        let placed = self
            .order_repository
            .place(&params.user_id, params.product_id)
            .await?;

        match placed {
            Some(order) => Ok(order),
            None => {
                self.logger.warn(&format!(
                    "Order lost stock race: product {}",
                    params.product_id
                ));
                Err(OrderError::OutOfStock)
            }
        }
    }
}
