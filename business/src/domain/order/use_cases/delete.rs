use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteOrderParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteOrderUseCase: Send + Sync {
    async fn execute(&self, params: DeleteOrderParams) -> Result<(), OrderError>;
}
