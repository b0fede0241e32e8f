use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::Account;
use crate::domain::account::services::TokenPair;

pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
}

/// An account together with the credential pair issued for it.
#[derive(Debug)]
pub struct AuthenticatedAccount {
    pub account: Account,
    pub tokens: TokenPair,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<AuthenticatedAccount, AccountError>;
}
