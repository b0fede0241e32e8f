use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::account::model::Account;
use business::domain::account::repository::AccountRepository;
use business::domain::errors::RepositoryError;

use super::entity::AccountEntity;

const COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, phone_number, address, created_at, updated_at";

pub struct AccountRepositoryPostgres {
    pool: PgPool,
}

impl AccountRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if e.as_database_error()
        .is_some_and(|d| d.is_unique_violation())
    {
        return RepositoryError::Duplicated;
    }
    tracing::error!("Account write failed: {e}");
    RepositoryError::DatabaseError
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Account, RepositoryError> {
        let entity = sqlx::query_as::<_, AccountEntity>(&format!(
            "SELECT {COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
        let entity = sqlx::query_as::<_, AccountEntity>(&format!(
            "SELECT {COLUMNS} FROM accounts WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, account: &Account) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO accounts (id, username, email, password_hash, first_name, last_name, phone_number, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                email = EXCLUDED.email,
                password_hash = EXCLUDED.password_hash,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                phone_number = EXCLUDED.phone_number,
                address = EXCLUDED.address,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.phone_number)
        .bind(&account.address)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
