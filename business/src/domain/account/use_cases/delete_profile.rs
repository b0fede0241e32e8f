use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteProfileParams {
    pub caller: UserId,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProfileParams) -> Result<(), AccountError>;
}
