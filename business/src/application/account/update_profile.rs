use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::Account;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::services::PasswordHasher;
use crate::domain::account::use_cases::update_profile::{
    UpdateProfileParams, UpdateProfileUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateProfileUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, params: UpdateProfileParams) -> Result<Account, AccountError> {
        if params.id != params.caller.as_uuid() {
            return Err(AccountError::Forbidden);
        }

        self.logger
            .info(&format!("Updating profile: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AccountError::NotFound,
                other => AccountError::Repository(other),
            })?;

        // Absent fields keep their stored value; a supplied password is
        // re-hashed and never stored in plaintext.
        let password_hash = match params.password {
            Some(plain) if !plain.trim().is_empty() => self.password_hasher.hash(&plain)?,
            Some(_) => return Err(AccountError::PasswordEmpty),
            None => existing.password_hash.clone(),
        };

        let updated = Account::from_repository(
            existing.id,
            params.username.unwrap_or(existing.username),
            params.email.unwrap_or(existing.email),
            password_hash,
            params.first_name.unwrap_or(existing.first_name),
            params.last_name.unwrap_or(existing.last_name),
            params.phone_number.unwrap_or(existing.phone_number),
            params.address.unwrap_or(existing.address),
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await.map_err(|e| match e {
            RepositoryError::Duplicated => AccountError::UsernameTaken,
            other => AccountError::Repository(other),
        })?;

        self.logger
            .info(&format!("Profile updated: {}", updated.id));
        Ok(updated)
    }
}
