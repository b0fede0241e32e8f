use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::Account;
use crate::domain::shared::value_objects::UserId;

/// Partial update. Fields left as `None` retain their stored value.
pub struct UpdateProfileParams {
    pub caller: UserId,
    pub id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileParams) -> Result<Account, AccountError>;
}
