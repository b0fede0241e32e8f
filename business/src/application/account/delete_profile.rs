use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::use_cases::delete_profile::{
    DeleteProfileParams, DeleteProfileUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteProfileUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProfileUseCase for DeleteProfileUseCaseImpl {
    async fn execute(&self, params: DeleteProfileParams) -> Result<(), AccountError> {
        if params.id != params.caller.as_uuid() {
            return Err(AccountError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting profile: {}", params.id));

        self.repository.delete(params.id).await.map_err(|e| match e {
            RepositoryError::NotFound => AccountError::NotFound,
            other => AccountError::Repository(other),
        })?;

        Ok(())
    }
}
