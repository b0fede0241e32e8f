use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::delete::{DeleteOrderParams, DeleteOrderUseCase};

pub struct DeleteOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteOrderUseCase for DeleteOrderUseCaseImpl {
    async fn execute(&self, params: DeleteOrderParams) -> Result<(), OrderError> {
        self.logger
            .info(&format!("Deleting order: {}", params.id));

        self.repository
            .delete(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        Ok(())
    }
}
