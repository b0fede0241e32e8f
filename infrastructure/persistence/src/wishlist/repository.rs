use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::WishlistEntry;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistEntryEntity;

const JOINED_COLUMNS: &str = r#"w.id, w.user_id, w.added_at,
    p.id AS product_id,
    p.name AS product_name,
    p.description AS product_description,
    p.price AS product_price,
    p.image_url AS product_image_url,
    p.stock AS product_stock,
    p.is_active AS product_is_active,
    p.category AS product_category,
    p.created_at AS product_created_at,
    p.updated_at AS product_updated_at"#;

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntryEntity>(&format!(
            "SELECT {JOINED_COLUMNS} FROM wishlist_entries w JOIN products p ON p.id = w.product_id WHERE w.user_id = $1 ORDER BY w.added_at DESC"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        user_id: &UserId,
    ) -> Result<WishlistEntry, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntryEntity>(&format!(
            "SELECT {JOINED_COLUMNS} FROM wishlist_entries w JOIN products p ON p.id = w.product_id WHERE w.id = $1 AND w.user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_product_id(
        &self,
        product_id: Uuid,
        user_id: &UserId,
    ) -> Result<Option<WishlistEntry>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntryEntity>(&format!(
            "SELECT {JOINED_COLUMNS} FROM wishlist_entries w JOIN products p ON p.id = w.product_id WHERE w.product_id = $1 AND w.user_id = $2"
        ))
        .bind(product_id)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, entry: &WishlistEntry) -> Result<(), RepositoryError> {
        // No upsert: (user_id, product_id) carries a unique constraint and a
        // second insert must surface as Duplicated.
        sqlx::query(
            r#"INSERT INTO wishlist_entries (id, user_id, product_id, added_at)
            VALUES ($1, $2, $3, $4)"#,
        )
        .bind(entry.id)
        .bind(entry.user_id.as_uuid())
        .bind(entry.product.id)
        .bind(entry.added_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                RepositoryError::Duplicated
            } else {
                tracing::error!("Wishlist write failed: {e}");
                RepositoryError::DatabaseError
            }
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM wishlist_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
