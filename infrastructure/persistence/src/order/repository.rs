use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use crate::product::entity::ProductEntity;

use super::entity::OrderEntity;

const JOINED_COLUMNS: &str = r#"o.id, o.user_id, o.status, o.total_price, o.created_at,
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

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {JOINED_COLUMNS} FROM orders o JOIN products p ON p.id = o.product_id WHERE o.user_id = $1 ORDER BY o.created_at DESC"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {JOINED_COLUMNS} FROM orders o JOIN products p ON p.id = o.product_id WHERE o.id = $1 AND o.user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn place(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        // Conditional decrement; matching no row means the product is gone,
        // inactive, or just sold out. Dropping the transaction rolls back.
        let decremented = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products
            SET stock = stock - 1, updated_at = NOW()
            WHERE id = $1 AND is_active = TRUE AND stock >= 1
            RETURNING id, name, description, price, image_url, stock, is_active, category, created_at, updated_at"#,
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let Some(product_entity) = decremented else {
            return Ok(None);
        };

        let order = Order::place(*user_id, product_entity.into_domain());

        sqlx::query(
            r#"INSERT INTO orders (id, user_id, product_id, status, total_price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_uuid())
        .bind(order.ordered_item.id)
        .bind(&order.status)
        .bind(&order.total_price)
        .bind(order.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Order insert failed: {e}");
            RepositoryError::DatabaseError
        })?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Some(order))
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO orders (id, user_id, product_id, status, total_price, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status,
                total_price = EXCLUDED.total_price"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_uuid())
        .bind(order.ordered_item.id)
        .bind(&order.status)
        .bind(&order.total_price)
        .bind(order.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Order write failed: {e}");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND user_id = $2")
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
