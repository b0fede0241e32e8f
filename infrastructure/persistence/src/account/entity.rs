use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::account::model::Account;

#[derive(Debug, FromRow)]
pub struct AccountEntity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountEntity {
    pub fn into_domain(self) -> Account {
        Account::from_repository(
            self.id,
            self.username,
            self.email,
            self.password_hash,
            self.first_name,
            self.last_name,
            self.phone_number,
            self.address,
            self.created_at,
            self.updated_at,
        )
    }
}
