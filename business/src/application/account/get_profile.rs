use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::Account;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<Account, AccountError> {
        // Callers may only ever read their own record.
        if let Some(id) = params.id
            && id != params.caller.as_uuid()
        {
            return Err(AccountError::Forbidden);
        }

        self.logger
            .debug(&format!("Fetching profile: {}", params.caller));

        self.repository
            .get_by_id(params.caller.as_uuid())
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AccountError::NotFound,
                other => AccountError::Repository(other),
            })
    }
}
