use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::services::{CredentialIssuer, PasswordHasher};
use crate::domain::account::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::account::use_cases::register::AuthenticatedAccount;
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub credential_issuer: Arc<dyn CredentialIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<AuthenticatedAccount, AccountError> {
        self.logger
            .info(&format!("Login attempt: {}", params.username));

        // Unknown username and wrong password are indistinguishable on purpose.
        let Some(account) = self.repository.find_by_username(&params.username).await? else {
            return Err(AccountError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&account.password_hash, &params.password)
        {
            self.logger
                .warn(&format!("Failed login for: {}", params.username));
            return Err(AccountError::InvalidCredentials);
        }

        let tokens = self.credential_issuer.issue(account.id, &account.username)?;

        Ok(AuthenticatedAccount { account, tokens })
    }
}
