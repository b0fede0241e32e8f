use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

pub const INITIAL_STATUS: &str = "pending";

/// A single-unit order. `status` is a free-form string by design; callers
/// may overwrite it with any value via the update-status operation.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub ordered_item: Product,
    pub status: String,
    pub total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order for one unit of `product`, snapshotting the
    /// product's current price as `total_price`.
    pub fn place(user_id: UserId, product: Product) -> Self {
        let total_price = product.price.clone();
        Self {
            id: Uuid::new_v4(),
            user_id,
            ordered_item: product,
            status: INITIAL_STATUS.to_string(),
            total_price,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        ordered_item: Product,
        status: String,
        total_price: BigDecimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            ordered_item,
            status,
            total_price,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use std::str::FromStr;

    fn product(price: &str, stock: i32) -> Product {
        Product::new(NewProductProps {
            name: "Walnut Desk".to_string(),
            description: String::new(),
            price: BigDecimal::from_str(price).unwrap(),
            image_url: String::new(),
            stock,
            is_active: true,
            category: "furniture".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn should_start_in_pending_status() {
        let order = Order::place(UserId::new(Uuid::new_v4()), product("249.00", 3));

        assert_eq!(order.status, "pending");
    }

    #[test]
    fn should_snapshot_product_price_as_total() {
        let p = product("249.00", 3);
        let expected = p.price.clone();

        let order = Order::place(UserId::new(Uuid::new_v4()), p);

        assert_eq!(order.total_price, expected);
    }

    #[test]
    fn should_belong_to_placing_user() {
        let user_id = UserId::new(Uuid::new_v4());
        let order = Order::place(user_id, product("5.00", 1));

        assert_eq!(order.user_id, user_id);
    }
}
