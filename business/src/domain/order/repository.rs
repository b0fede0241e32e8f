use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Returns only the caller's own orders.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError>;
    /// Atomically decrements the product's stock by one and inserts the order
    /// in a single transaction. Returns `None` when the conditional decrement
    /// matched no row (stock exhausted or product deactivated meanwhile).
    async fn place(&self, user_id: &UserId, product_id: Uuid)
    -> Result<Option<Order>, RepositoryError>;
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
