use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::Account;
use crate::domain::shared::value_objects::UserId;

pub struct GetProfileParams {
    pub caller: UserId,
    /// Profile primary key. `None` targets the caller's own record.
    pub id: Option<Uuid>,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<Account, AccountError>;
}
