use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllOrdersParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllOrdersUseCase: Send + Sync {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Vec<Order>, OrderError>;
}
