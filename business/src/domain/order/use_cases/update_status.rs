use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

/// `status` is accepted verbatim; there is no transition validation.
pub struct UpdateOrderStatusParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub status: String,
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
