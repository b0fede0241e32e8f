use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Vec<Order>, OrderError> {
        self.logger
            .debug(&format!("Listing orders: user {}", params.user_id));

        let orders = self.repository.get_all(&params.user_id).await?;

        Ok(orders)
    }
}
