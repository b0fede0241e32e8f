use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Account;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Account, RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError>;
    async fn save(&self, account: &Account) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
