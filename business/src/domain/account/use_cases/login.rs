use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::use_cases::register::AuthenticatedAccount;

pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<AuthenticatedAccount, AccountError>;
}
